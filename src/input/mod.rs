/*!
 * Input Module
 * Turning the textual input into a simulation session
 */

pub mod parser;

pub use parser::{parse_input, parse_lines, OutputMode, SimulationInput};
