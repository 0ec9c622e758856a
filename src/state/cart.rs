use super::data::{CartItem, ItemId};

/// One aggregated line in the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    /// Always >= 1
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Result of an add, used by the controller for the acknowledgment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// New line with quantity 1
    Inserted,
    /// Existing line, quantity is now the contained value
    Incremented(u32),
    /// The item had no id; nothing changed
    MissingId,
}

/// In-memory cart, ordered by first insertion
///
/// Lines are kept in a `Vec`: carts are small and a linear scan keeps the
/// insertion order without a second index to maintain.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`
    ///
    /// Repeated adds of the same id bump the quantity; the name and price
    /// recorded on first add are kept.
    pub fn add(&mut self, item: CartItem) -> AddOutcome {
        let Some(id) = item.id else {
            return AddOutcome::MissingId;
        };

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity += 1;
            return AddOutcome::Incremented(line.quantity);
        }

        self.lines.push(CartLine {
            id,
            name: item.name,
            price: item.price,
            quantity: 1,
        });
        AddOutcome::Inserted
    }

    /// Drop the whole line for `id`, returns whether anything was removed
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.id != id);
        self.lines.len() != before
    }

    /// Sum of price × quantity, recomputed on every call
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[cfg(test)]
    pub fn get(&self, id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn item(id: &str, name: &str, price: f64) -> CartItem {
        CartItem {
            id: Some(ItemId::new(id)),
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_add_same_item_twice_increments() {
        let mut cart = Cart::new();

        assert_eq!(cart.add(item("p1", "Mango", 300.0)), AddOutcome::Inserted);
        assert_eq!(cart.add(item("p1", "Mango", 300.0)), AddOutcome::Incremented(2));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 600.0);
    }

    #[test]
    fn test_first_seen_price_wins() {
        let mut cart = Cart::new();
        cart.add(item("p1", "Mango", 300.0));
        cart.add(item("p1", "Mango (new)", 999.0));

        let line = cart.get(&ItemId::new("p1")).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.price, 300.0);
        assert_eq!(line.name, "Mango");
    }

    #[test]
    fn test_add_without_id_is_noop() {
        let mut cart = Cart::new();
        let outcome = cart.add(CartItem {
            id: None,
            name: "Ghost".to_string(),
            price: 10.0,
        });

        assert_eq!(outcome, AddOutcome::MissingId);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_size_and_quantities_match_add_counts() {
        let ids = ["a", "b", "a", "c", "b", "a"];
        let mut cart = Cart::new();
        let mut expected: HashMap<&str, u32> = HashMap::new();

        for id in ids {
            cart.add(item(id, id, 1.0));
            *expected.entry(id).or_default() += 1;
        }

        assert_eq!(cart.len(), expected.len());
        for (id, count) in expected {
            assert_eq!(cart.get(&ItemId::new(id)).unwrap().quantity, count);
        }
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(item("b", "Banyan", 1.0));
        cart.add(item("a", "Acacia", 1.0));
        cart.add(item("b", "Banyan", 1.0));

        let order: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn test_total_tracks_add_remove_interleaving() {
        let mut cart = Cart::new();
        cart.add(item("p1", "Mango", 300.0));
        cart.add(item("p2", "Neem", 150.0));
        cart.add(item("p2", "Neem", 150.0));
        assert_eq!(cart.total(), 600.0);

        assert!(cart.remove(&ItemId::new("p2")));
        assert_eq!(cart.total(), 300.0);

        cart.add(item("p3", "Teak", 50.0));
        cart.add(item("p1", "Mango", 300.0));
        let expected: f64 = cart
            .lines()
            .iter()
            .map(|l| l.price * f64::from(l.quantity))
            .sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total(), 650.0);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let mut cart = Cart::new();
        cart.add(item("p1", "Mango", 300.0));
        cart.add(item("p1", "Mango", 300.0));
        cart.add(item("p1", "Mango", 300.0));

        assert!(cart.remove(&ItemId::new("p1")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(item("p1", "Mango", 300.0));
        let before = cart.lines().to_vec();

        assert!(!cart.remove(&ItemId::new("nope")));

        assert_eq!(cart.lines(), before.as_slice());
        assert_eq!(cart.total(), 300.0);
    }
}
