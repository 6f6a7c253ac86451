use crate::Destination;

/// Replaces the current page.
pub trait Navigator {
    fn navigate(&mut self, destination: Destination);
}
