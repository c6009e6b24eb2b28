/*!
 * Monitoring
 * Diagnostic tracing for simulation sessions
 */

mod tracer;

pub use tracer::init_tracing;
