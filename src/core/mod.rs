pub mod cusp;
pub mod primitives;
pub mod rotation;
pub mod sign;
pub mod types;

pub use cusp::{HouseCusps, house_for_longitude};
pub use rotation::{house_for_sign, sign_for_house};
pub use sign::{ALL_SIGNS, ZodiacSign};
pub use types::{Ascendant, Body, BodyOrigin, DisplayConvention, DisplayMode, Point};
