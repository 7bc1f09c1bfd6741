pub mod attraction;
pub mod coordinates;
pub mod label;
pub mod notification;
pub mod trip;

pub use attraction::{Attraction, Priority};
pub use coordinates::Coordinates;
pub use label::{Label, LabelKind};
pub use notification::{Notification, NotificationKind};
pub use trip::{Trip, TripDetails};
