//! Mapping of device identities to `dg` emulator directives.
//!
//! [`DirectiveMapper`] turns one [`devsim_model::DeviceIdentity`] into an
//! ordered list of [`Directive`]s; [`render_script`] writes a batch of them as
//! a directive script.

#![deny(unsafe_code)]

pub mod directive;
pub mod mapper;
pub mod rules;
pub mod script;

pub use directive::{Assignment, Directive, PropertyKey, SensorKind};
pub use mapper::{DirectiveMapper, render_lines};
pub use rules::{OperatorNames, country_code, infer_brand, operator_names, sim_network_type};
pub use script::render_script;
