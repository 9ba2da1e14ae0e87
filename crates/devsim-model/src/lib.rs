pub mod enums;
pub mod error;
pub mod identity;
pub mod ids;
pub mod reference;

pub use enums::AccessTechnology;
pub use error::ModelError;
pub use identity::{DeviceIdentity, SensorReading, split_model_label};
pub use ids::TypeAllocationCode;
pub use reference::{BrandCatalog, Region};
