//! Component catalog: the Tabler widget set.
//!
//! One file per component. Every component is a `Deserialize` value struct
//! with builder methods, so it can be constructed in code or built by the
//! [`Registry`](crate::component::Registry) from an attribute map.

pub mod alert;
pub mod dark_mode_toggle;
pub mod datagrid;
pub mod dropdown;
pub mod icon;
pub mod illustration;
pub mod navbar;
pub mod placeholder;
pub mod rating;
pub mod settings_page;
pub mod status;
pub mod tabs;

pub use alert::{Alert, IconMode};
pub use dark_mode_toggle::DarkModeToggle;
pub use datagrid::{Datagrid, DatagridItem};
pub use dropdown::{Dropdown, DropdownEntry, DropdownItem, MenuAlign};
pub use icon::Icon;
pub use illustration::{Illustration, IllustrationSize};
pub use navbar::{NavDropdown, NavDropdownEntry, NavEntry, NavGroup, NavLink, Navbar};
pub use placeholder::{Placeholder, PlaceholderKind};
pub use rating::{Rating, RatingOption};
pub use settings_page::{SettingsItem, SettingsPage};
pub use status::Status;
pub use tabs::{Tab, TabStyle, Tabs};
