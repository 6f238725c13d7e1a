//! Slug sanitization for taxonomy attribute values.
//!
//! This module turns human-readable attribute values taken from the product
//! export (e.g. "Smith & Wesson") into the URL-safe term slugs the
//! merchandising plugin matches against (e.g. "smith-wesson"). The slug is
//! used as the rule's condition value while the raw value stays in the
//! rule's display name.

pub mod slug;
