/// Presentation layer
///
/// Screens read the session and emit `Message`s; they never mutate state.
/// - One module per screen (home, filter, detail, review, profile, map)
/// - `bottom_nav` for the tab bar, `toast` for notifications
/// - `occupancy` for the live occupancy chart
/// - `style` for shared colors and small widgets

pub mod bottom_nav;
pub mod detail;
pub mod filter;
pub mod home;
pub mod map;
pub mod occupancy;
pub mod profile;
pub mod review;
pub mod style;
pub mod toast;
