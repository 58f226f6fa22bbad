//! Vocabulary constants used by the template engine.

/// The only instance head the engine expands: `ottr:Triple`.
pub const OTTR_TRIPLE: &str = "http://ns.ottr.xyz/0.4/Triple";

/// `xsd:boolean` datatype IRI.
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

/// `xsd:integer` datatype IRI.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

/// `xsd:double` datatype IRI.
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
