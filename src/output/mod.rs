/*!
 * Output Module
 * Per-tick execution marks and their rendered reports
 */

pub mod render;
pub mod timeline;

pub use render::{render, render_json, render_stats, render_trace};
pub use timeline::{Mark, Timeline};
