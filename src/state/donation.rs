//! Donation form state and validation
//!
//! Independent of the catalog and the cart; nothing is sent anywhere.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationForm {
    pub name: String,
    pub email: String,
    pub count: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DonationError {
    #[error("Please provide name, email and number of trees.")]
    MissingFields,
    #[error("Number of trees must be a positive whole number.")]
    InvalidCount,
}

/// A validated pledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donation {
    pub name: String,
    pub trees: u32,
}

impl Donation {
    pub fn acknowledgment(&self) -> String {
        format!(
            "Thanks {}! Donation for {} trees received (demo).",
            self.name, self.trees
        )
    }
}

impl DonationForm {
    pub fn validate(&self) -> Result<Donation, DonationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let count = self.count.trim();

        if name.is_empty() || email.is_empty() || count.is_empty() {
            return Err(DonationError::MissingFields);
        }

        let trees = count
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(DonationError::InvalidCount)?;

        Ok(Donation {
            name: name.to_string(),
            trees,
        })
    }

    /// Validate and, on success, clear the form
    pub fn submit(&mut self) -> Result<Donation, DonationError> {
        let donation = self.validate()?;
        *self = Self::default();
        Ok(donation)
    }
}
