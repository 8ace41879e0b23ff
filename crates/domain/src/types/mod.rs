//! Domain types and models

pub mod booking;
pub mod club;
pub mod matches;
pub mod notification;
pub mod payment;
pub mod support;
pub mod user;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use club::{AvailabilitySlot, Club, ClubFilter, Court, Sport};
pub use matches::{MatchFilter, MatchPlayer, MatchStatus, NewMatch, OpenMatch};
pub use notification::{Notification, NotificationSettings};
pub use payment::{PaymentIntent, PaymentIntentRequest, PaymentMethod, PaymentRecord};
pub use support::{FaqEntry, NewTicket, SupportTicket};
pub use user::{NewUser, UserProfile, UserStats, UserUpdate};
