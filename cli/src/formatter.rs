use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use numerus::{is_numeral, Calculation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Integer for a single numeral, numeral for an expression
    Auto,
    /// The integer result
    Integer,
    /// The numeral result
    Numeral,
    /// Integer followed by numeral
    Both,
    /// One JSON object per expression
    Json,
    /// A table with the expression and both results
    Table,
}

pub struct Formatter {
    format: OutputFormat,
    plain: bool,
}

impl Formatter {
    pub fn new(format: OutputFormat, plain: bool) -> Self {
        Self { format, plain }
    }

    /// Render one calculation, including the trailing newline
    pub fn format_calculation(&self, calculation: &Calculation) -> String {
        let line = match self.format {
            OutputFormat::Auto => {
                if is_numeral(calculation.expression()) {
                    self.wrap(&calculation.integer_slot())
                } else {
                    self.wrap(calculation.numeral_slot())
                }
            }
            OutputFormat::Integer => self.wrap(&calculation.integer_slot()),
            OutputFormat::Numeral => self.wrap(calculation.numeral_slot()),
            OutputFormat::Both => match calculation {
                Calculation::Value {
                    integer, numeral, ..
                } => format!("{} {}", integer, self.wrap(numeral)),
                Calculation::Error { message, .. } => self.wrap(message),
            },
            OutputFormat::Json => serde_json::to_string(calculation)
                .unwrap_or_else(|e| format!("{{\"status\":\"error\",\"message\":\"{}\"}}", e)),
            OutputFormat::Table => self.format_table(calculation),
        };

        format!("{}\n", line)
    }

    fn wrap(&self, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            format!("({})", text)
        }
    }

    fn format_table(&self, calculation: &Calculation) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Expression").set_alignment(CellAlignment::Left),
            Cell::new("Integer").set_alignment(CellAlignment::Right),
            Cell::new("Numeral").set_alignment(CellAlignment::Left),
        ]));

        let integer = calculation
            .integer()
            .map(|integer| integer.to_string())
            .unwrap_or_else(|| "?".to_string());
        table.add_row(Row::from(vec![
            Cell::new(calculation.expression()),
            Cell::new(integer).set_alignment(CellAlignment::Right),
            Cell::new(calculation.numeral_slot()),
        ]));

        table.to_string()
    }
}
