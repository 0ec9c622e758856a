use serde_json::Value;

use super::data::{ItemId, PlantDetail};
use crate::api::fields::plant_detail_from;
use crate::api::normalize::find_detail_record;
use crate::api::FetchError;

/// What the detail modal is showing
#[derive(Debug, Clone, PartialEq)]
pub enum ModalContent {
    /// Opened for a plant without an id
    NoDetails,
    Loading,
    /// Fetched, but no record could be located in the response
    Unavailable,
    Failed,
    Loaded(PlantDetail),
}

/// Detail modal state
///
/// Each open is numbered so a response for a modal that was closed or
/// re-opened on another plant is ignored.
#[derive(Debug, Default)]
pub struct DetailModal {
    content: Option<ModalContent>,
    request: u64,
}

impl DetailModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    /// Open for `id`; returns the request number when a fetch is needed
    pub fn open(&mut self, id: Option<&ItemId>) -> Option<u64> {
        self.request += 1;
        match id {
            None => {
                self.content = Some(ModalContent::NoDetails);
                None
            }
            Some(_) => {
                self.content = Some(ModalContent::Loading);
                Some(self.request)
            }
        }
    }

    pub fn close(&mut self) {
        self.request += 1;
        self.content = None;
    }

    /// Apply a detail response; false if it was stale
    pub fn finish(&mut self, request: u64, id: ItemId, result: Result<Value, FetchError>) -> bool {
        if request != self.request || !self.is_open() {
            return false;
        }

        let content = match result {
            Ok(payload) => match find_detail_record(&payload) {
                Some(record) => ModalContent::Loaded(plant_detail_from(id, &record)),
                None => ModalContent::Unavailable,
            },
            Err(_) => ModalContent::Failed,
        };
        self.content = Some(content);
        true
    }

    /// The loaded plant, if the modal currently shows one
    pub fn detail(&self) -> Option<&PlantDetail> {
        match &self.content {
            Some(ModalContent::Loaded(detail)) => Some(detail),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_open_without_id_needs_no_fetch() {
        let mut modal = DetailModal::new();
        assert_eq!(modal.open(None), None);
        assert_eq!(modal.content(), Some(&ModalContent::NoDetails));
    }

    #[test]
    fn test_loaded_detail() {
        let mut modal = DetailModal::new();
        let id = ItemId::new("3");
        let request = modal.open(Some(&id)).unwrap();
        assert_eq!(modal.content(), Some(&ModalContent::Loading));

        let payload = json!({"status": true, "plants": {"name": "Neem", "price": 120}});
        assert!(modal.finish(request, id, Ok(payload)));

        let detail = modal.detail().unwrap();
        assert_eq!(detail.name, "Neem");
        assert_eq!(detail.price, 120.0);
    }

    #[test]
    fn test_missing_record_is_unavailable() {
        let mut modal = DetailModal::new();
        let id = ItemId::new("3");
        let request = modal.open(Some(&id)).unwrap();

        modal.finish(request, id, Ok(json!({"status": false})));
        assert_eq!(modal.content(), Some(&ModalContent::Unavailable));
    }

    #[test]
    fn test_failure_keeps_modal_open() {
        let mut modal = DetailModal::new();
        let id = ItemId::new("3");
        let request = modal.open(Some(&id)).unwrap();

        modal.finish(request, id, Err(FetchError::Status(500)));
        assert!(modal.is_open());
        assert_eq!(modal.content(), Some(&ModalContent::Failed));
    }

    #[test]
    fn test_response_after_close_is_ignored() {
        let mut modal = DetailModal::new();
        let id = ItemId::new("3");
        let request = modal.open(Some(&id)).unwrap();
        modal.close();

        assert!(!modal.finish(request, id, Ok(json!({"data": {"name": "Neem"}}))));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_response_for_previous_plant_is_ignored() {
        let mut modal = DetailModal::new();
        let first = modal.open(Some(&ItemId::new("1"))).unwrap();
        let second = modal.open(Some(&ItemId::new("2"))).unwrap();

        assert!(!modal.finish(first, ItemId::new("1"), Ok(json!({"data": {"name": "Old"}}))));
        assert!(modal.finish(second, ItemId::new("2"), Ok(json!({"data": {"name": "New"}}))));
        assert_eq!(modal.detail().unwrap().name, "New");
    }
}
