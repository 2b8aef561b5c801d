//! Table Generators
//!
//! Multiplication grid and the student grade report. Both are built from
//! fixed data and have no error cases.

pub const HEADER_BACKGROUND: &str = "#3498db";
const EVEN_SHADE: &str = "#a8e6cf";
const ODD_SHADE: &str = "#dcedc1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCell {
    pub product: u32,
}

impl ProductCell {
    pub fn is_even(&self) -> bool {
        self.product % 2 == 0
    }

    pub fn background(&self) -> &'static str {
        if self.is_even() {
            EVEN_SHADE
        } else {
            ODD_SHADE
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplicationTable {
    pub size: u32,
    /// Row-major, `size` rows of `size` cells
    pub rows: Vec<Vec<ProductCell>>,
}

impl MultiplicationTable {
    pub fn generate(size: u32) -> Self {
        let rows = (1..=size)
            .map(|row| {
                (1..=size)
                    .map(|col| ProductCell { product: row * col })
                    .collect()
            })
            .collect();
        Self { size, rows }
    }

    pub fn title(&self) -> String {
        format!("Multiplication Table (1-{})", self.size)
    }

    /// Grid columns including the row-header column
    pub fn columns(&self) -> u32 {
        self.size + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Student {
    pub name: &'static str,
    pub grade: u8,
}

pub const ROSTER: [Student; 5] = [
    Student { name: "Alice", grade: 85 },
    Student { name: "Bob", grade: 92 },
    Student { name: "Charlie", grade: 78 },
    Student { name: "Diana", grade: 96 },
    Student { name: "Ethan", grade: 88 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl GradeBand {
    pub fn for_grade(grade: u8) -> Self {
        match grade {
            90..=u8::MAX => GradeBand::Excellent,
            80..=89 => GradeBand::Good,
            70..=79 => GradeBand::Average,
            _ => GradeBand::NeedsImprovement,
        }
    }

    /// CSS class, styled in styles.css
    pub fn class(self) -> &'static str {
        match self {
            GradeBand::Excellent => "excellent",
            GradeBand::Good => "good",
            GradeBand::Average => "average",
            GradeBand::NeedsImprovement => "needs-improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeLine {
    pub student: Student,
    pub band: GradeBand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeReport {
    pub lines: Vec<GradeLine>,
    pub average: f64,
}

impl GradeReport {
    pub fn build(students: &[Student]) -> Self {
        let lines: Vec<GradeLine> = students
            .iter()
            .map(|&student| GradeLine {
                student,
                band: GradeBand::for_grade(student.grade),
            })
            .collect();

        let total: u32 = students.iter().map(|s| u32::from(s.grade)).sum();
        let average = if students.is_empty() {
            0.0
        } else {
            f64::from(total) / students.len() as f64
        };

        Self { lines, average }
    }

    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplication_grid() {
        let table = MultiplicationTable::generate(5);
        assert_eq!(table.rows.len(), 5);
        assert!(table.rows.iter().all(|r| r.len() == 5));
        assert_eq!(table.columns(), 6);
        assert_eq!(table.title(), "Multiplication Table (1-5)");

        assert_eq!(table.rows[2][3].product, 12);
        assert_eq!(table.rows[4][4].product, 25);
        assert_eq!(table.rows[2][3].background(), "#a8e6cf");
        assert_eq!(table.rows[2][2].background(), "#dcedc1");
    }

    #[test]
    fn test_grade_bands() {
        assert_eq!(GradeBand::for_grade(100), GradeBand::Excellent);
        assert_eq!(GradeBand::for_grade(90), GradeBand::Excellent);
        assert_eq!(GradeBand::for_grade(89), GradeBand::Good);
        assert_eq!(GradeBand::for_grade(80), GradeBand::Good);
        assert_eq!(GradeBand::for_grade(70), GradeBand::Average);
        assert_eq!(GradeBand::for_grade(69), GradeBand::NeedsImprovement);
        assert_eq!(GradeBand::for_grade(0), GradeBand::NeedsImprovement);
    }

    #[test]
    fn test_roster_report() {
        let report = GradeReport::build(&ROSTER);
        assert_eq!(report.average_label(), "87.8");

        let classes: Vec<_> = report.lines.iter().map(|l| (l.student.name, l.band.class())).collect();
        assert_eq!(
            classes,
            vec![
                ("Alice", "good"),
                ("Bob", "excellent"),
                ("Charlie", "average"),
                ("Diana", "excellent"),
                ("Ethan", "good"),
            ]
        );
    }
}
