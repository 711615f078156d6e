// @generated by protoc-gen-rust_constructors. Do not edit.

#[allow(clippy::redundant_field_names, clippy::needless_update)]
impl Shape {
    /// A red shape at the origin.
    pub fn red(name: String, area: i64) -> Self {
        Self {
            name: name,
            color: Color::Red as i32,
            scale: 1.5,
            area: area,
            visible: true,
            origin: Some(shape::Point::at(0.0, 0.0)),
            ..Default::default()
        }
    }

    pub fn labeled(label: String, color: Color) -> Self {
        Self {
            label: Some(label),
            color: color as i32,
            name: "unnamed \"shape\"".to_string(),
            ..Default::default()
        }
    }
}

#[allow(clippy::redundant_field_names, clippy::needless_update)]
impl shape::Point {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: x,
            y: y,
            ..Default::default()
        }
    }

    pub fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            ..Default::default()
        }
    }
}
