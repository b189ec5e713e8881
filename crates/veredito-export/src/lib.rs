//! Deterministic post-processing of AI-generated trading signals: entry
//! derivation, ROI scoring, per-horizon selection with threshold relaxation,
//! and the downloadable veredito payload.

pub mod builder;
pub mod entry;
pub mod export;
pub mod selector;

pub use builder::build_item;
pub use entry::resolve_entry;
pub use export::{
    build_veredito_array, build_veredito_array_by_horizon, export_filename,
    export_veredito_json_by_horizon, VereditoExport,
};
pub use selector::{roi_for_side, HorizonSelector, SelectionPolicy, SideSelection};
