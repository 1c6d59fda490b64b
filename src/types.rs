use image::Rgb;

/// Landmark coordinates beyond this are malformed; `center ± radius` in the
/// draw primitives must stay inside `i32`.
pub const MAX_COORD: f32 = 1_000_000.0;

/// A landmark in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    pub x: i32,
    pub y: i32,
}

impl Landmark {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Parses a raw detector entry. Needs at least two finite values within
    /// `±MAX_COORD`; anything past the second (e.g. depth) is ignored.
    pub fn from_coords(coords: &[f32]) -> Option<Self> {
        let in_range = |v: f32| v.is_finite() && v.abs() <= MAX_COORD;
        match coords {
            [x, y, ..] if in_range(*x) && in_range(*y) => Some(Self {
                x: *x as i32,
                y: *y as i32,
            }),
            _ => None,
        }
    }
}

/// Servo angles in display order. Re-inserting a name updates it in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServoAngles {
    entries: Vec<(String, f32)>,
}

impl ServoAngles {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn insert(&mut self, name: impl Into<String>, angle: f32) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = angle;
        } else {
            self.entries.push((name, angle));
        }
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| *a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), *a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f32)> for ServoAngles {
    fn from_iter<I: IntoIterator<Item = (S, f32)>>(iter: I) -> Self {
        let mut angles = Self::new();
        for (name, angle) in iter {
            angles.insert(name, angle);
        }
        angles
    }
}

/// One row of the overlay panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLine {
    pub label: String,
    pub value: String,
    pub color: Rgb<u8>,
}

impl PanelLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>, color: Rgb<u8>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            color,
        }
    }

    /// `"label: value"` as measured for box sizing
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }

    /// `text()` with trailing whitespace removed, as drawn
    pub fn display_text(&self) -> String {
        self.text().trim_end().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PanelBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn corners(&self) -> [(i32, i32); 4] {
        [
            (self.left, self.top),
            (self.right, self.top),
            (self.left, self.bottom),
            (self.right, self.bottom),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmark_parsing_skips_malformed_entries() {
        assert_eq!(Landmark::from_coords(&[10.7, 20.2]), Some(Landmark::new(10, 20)));
        assert_eq!(Landmark::from_coords(&[1.0, 2.0, 0.5]), Some(Landmark::new(1, 2)));
        assert_eq!(Landmark::from_coords(&[5.0]), None);
        assert_eq!(Landmark::from_coords(&[]), None);
        assert_eq!(Landmark::from_coords(&[f32::NAN, 3.0]), None);
        assert_eq!(Landmark::from_coords(&[3.0e9, 10.0]), None);
        assert_eq!(Landmark::from_coords(&[10.0, -3.0e9]), None);
        assert_eq!(Landmark::from_coords(&[-50.0, 2000.0]), Some(Landmark::new(-50, 2000)));
    }

    #[test]
    fn servo_angles_keep_insertion_order() {
        let mut angles = ServoAngles::new();
        angles.insert("Servo 2", 90.0);
        angles.insert("Servo 1", 45.0);
        angles.insert("Servo 2", 10.0);

        let names: Vec<&str> = angles.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Servo 2", "Servo 1"]);
        assert_eq!(angles.get("Servo 2"), Some(10.0));
        assert_eq!(angles.len(), 2);
    }

    #[test]
    fn panel_line_trims_only_for_display() {
        let line = PanelLine::new("SERVO ANGLES", "", Rgb([255, 255, 255]));
        assert_eq!(line.text(), "SERVO ANGLES: ");
        assert_eq!(line.display_text(), "SERVO ANGLES:");
    }
}
