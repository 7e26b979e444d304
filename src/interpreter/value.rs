/// Runtime values and the conversion table between declared kinds.
///
/// Defines `Value`, the tagged variable payload, and `Kind`, the name of a
/// declared type. Every way of building a variable (from a literal, from a
/// line of input, or by copying another variable) goes through the same
/// conversion routine.
pub mod core;
/// The two rules that decide whether something is boolean-true.
///
/// Literal keywords and interactive input are judged by separate rules.
pub mod truthiness;
