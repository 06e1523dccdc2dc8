//! Magnitude styling: the stepped color scale, the linear radius scale and the legend
//! derived from them.

use std::fmt;

/// Metres of circle radius per unit of magnitude.
pub const RADIUS_PER_MAGNITUDE: f64 = 20_000.0;

/// Magnitude grades shown in the legend, lowest first.
pub const LEGEND_GRADES: [u32; 7] = [0, 1, 2, 3, 4, 5, 6];

/// Named CSS colors used by the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
	/// Magnitude above 6.
	Red,
	/// Above 5.
	Purple,
	/// Above 4.
	Orange,
	/// Above 3.
	Gold,
	/// Above 2.
	Yellow,
	/// Above 1.
	GreenYellow,
	/// 1 and below, or unknown.
	Grey,
	/// Plate boundaries.
	Goldenrod,
}

impl Color {
	/// CSS keyword for the color.
	pub fn as_css(self) -> &'static str {
		match self {
			Color::Red => "red",
			Color::Purple => "purple",
			Color::Orange => "orange",
			Color::Gold => "gold",
			Color::Yellow => "yellow",
			Color::GreenYellow => "greenyellow",
			Color::Grey => "grey",
			Color::Goldenrod => "goldenrod",
		}
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_css())
	}
}

/// Stepped color scale. Each band excludes its lower threshold, so `6.0` is purple and
/// `5.0` is orange. NaN fails every comparison and lands on grey.
pub fn color_for_magnitude(m: f64) -> Color {
	if m > 6.0 {
		Color::Red
	} else if m > 5.0 {
		Color::Purple
	} else if m > 4.0 {
		Color::Orange
	} else if m > 3.0 {
		Color::Gold
	} else if m > 2.0 {
		Color::Yellow
	} else if m > 1.0 {
		Color::GreenYellow
	} else {
		Color::Grey
	}
}

/// Circle radius in metres. Not clamped: zero, negative and NaN magnitudes pass through.
pub fn radius_for_magnitude(m: f64) -> f64 {
	m * RADIUS_PER_MAGNITUDE
}

/// One row of the magnitude legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	/// Grade at the bottom of the row.
	pub lower: f64,
	/// `None` for the open-ended top row.
	pub upper: Option<f64>,
	/// Swatch color.
	pub color: Color,
}

impl LegendEntry {
	/// `"lower–upper"` or `"lower+"` for the last row.
	pub fn label(&self) -> String {
		match self.upper {
			Some(upper) => format!("{}\u{2013}{}", self.lower, upper),
			None => format!("{}+", self.lower),
		}
	}
}

/// The seven legend rows. Swatches come from evaluating the color scale at `grade + 1`,
/// which is the top of each band.
pub fn legend_entries() -> Vec<LegendEntry> {
	LEGEND_GRADES
		.iter()
		.enumerate()
		.map(|(i, &grade)| LegendEntry {
			lower: grade as f64,
			upper: LEGEND_GRADES.get(i + 1).map(|&g| g as f64),
			color: color_for_magnitude(grade as f64 + 1.0),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn thresholds_fall_into_the_lower_band() {
		assert_eq!(color_for_magnitude(6.0), Color::Purple);
		assert_eq!(color_for_magnitude(6.0001), Color::Red);
		assert_eq!(color_for_magnitude(5.0), Color::Orange);
		assert_eq!(color_for_magnitude(1.0), Color::Grey);
		assert_eq!(color_for_magnitude(1.5), Color::GreenYellow);
	}

	#[test]
	fn color_scale_is_total() {
		for m in [f64::NAN, f64::NEG_INFINITY, -3.0, 0.0, 2.5, 3.5, 4.5, f64::INFINITY] {
			let c = color_for_magnitude(m);
			assert!(c != Color::Goldenrod, "{m} mapped outside the scale");
		}
		assert_eq!(color_for_magnitude(f64::NAN), Color::Grey);
	}

	#[test]
	fn colors_increase_across_each_threshold() {
		let order = [
			Color::Grey,
			Color::GreenYellow,
			Color::Yellow,
			Color::Gold,
			Color::Orange,
			Color::Purple,
			Color::Red,
		];
		for t in 1..=6 {
			let below = color_for_magnitude(t as f64 - 0.5);
			let above = color_for_magnitude(t as f64 + 0.5);
			let rank = |c| order.iter().position(|o| *o == c).unwrap();
			assert_eq!(rank(above), rank(below) + 1, "threshold {t}");
		}
	}

	#[test]
	fn radius_is_linear() {
		assert_eq!(radius_for_magnitude(3.0), 60_000.0);
		assert_eq!(radius_for_magnitude(0.0), 0.0);
		assert_eq!(radius_for_magnitude(-1.0), -20_000.0);
		assert!(radius_for_magnitude(f64::NAN).is_nan());
	}

	#[test]
	fn legend_rows() {
		let legend = legend_entries();
		let labels: Vec<String> = legend.iter().map(LegendEntry::label).collect();
		assert_eq!(
			labels,
			["0–1", "1–2", "2–3", "3–4", "4–5", "5–6", "6+"]
		);
		let colors: Vec<&str> = legend.iter().map(|e| e.color.as_css()).collect();
		assert_eq!(
			colors,
			["grey", "greenyellow", "yellow", "gold", "orange", "purple", "red"]
		);
	}
}
