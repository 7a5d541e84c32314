//! Shapes command - list the contracts and their fields.

use domain::Shape;

/// Execute the shapes command
pub fn execute() -> String {
    Shape::ALL
        .iter()
        .map(describe)
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe(shape: &Shape) -> String {
    let required: Vec<_> = shape.required_fields().collect();
    let optional: Vec<_> = shape.optional_fields().collect();

    format!(
        "{} ({})\n  required: {}\n  optional: {}",
        shape.name(),
        shape.alias(),
        list_or_dash(&required),
        list_or_dash(&optional),
    )
}

fn list_or_dash(fields: &[&str]) -> String {
    if fields.is_empty() {
        "-".to_string()
    } else {
        fields.join(", ")
    }
}
