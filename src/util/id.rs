//! Opaque identifier generation.

#[cfg(test)]
#[path = "id_test.rs"]
mod id_test;

/// Generate a fresh, globally unique identifier (UUID v4 string).
pub fn generate() -> String {
    uuid::Uuid::new_v4().to_string()
}
