//! # HouseKit Joinery
//!
//! Finger-jointed panel generation for laser-cut gable houses.
//!
//! ## Pipeline
//!
//! - **Geometry**: validated house dimensions and every derived panel size
//! - **Joint Table**: fixed male/female/plain assignment for each panel edge
//! - **Direction Resolver**: which side of an edge a tab or slot extrudes to
//! - **Distribution**: odd, evenly spaced joints along an edge
//! - **Edge Paths**: corner lists expanded into closed, kerf-compensated outlines
//! - **Panels**: full outlines for the seven panels, including roof slots
//! - **Layout**: skyline packing of panels onto a sheet of fixed width
//!
//! `HouseBoxMaker` runs the whole pipeline; `CuttingSummary` reports on the
//! result.

pub mod direction;
pub mod distribution;
pub mod edge_path;
pub mod geometry;
pub mod house_box;
pub mod joint_table;
pub mod layout;
pub mod panel;
pub mod panels;
pub mod path;
pub mod summary;

pub use distribution::{Joint, JointDistributor, JointInfo};
pub use edge_path::{EdgeJoints, EdgePathGenerator, EdgeSegment};
pub use geometry::HouseGeometry;
pub use house_box::{HouseBoxMaker, HouseParameters, HouseStyle};
pub use joint_table::Mate;
pub use layout::{LayoutItem, LayoutPacker, LayoutRect, LayoutResult, Placement, SheetSettings};
pub use panel::{EdgeName, PanelFamily, PanelKind, Polarity};
pub use panels::{Cutout, PanelGenerator, PanelOutline};
pub use path::{PanelPath, PathBuilder, PathCommand};
pub use summary::{assembly_instructions, CuttingSummary, PanelSummary};
