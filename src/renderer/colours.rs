pub(crate) struct Palette {
    pub border: &'static str,
    pub header: &'static str,
    pub cell: &'static str,
    pub over: &'static str,
    pub text: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            border: "#ffffff", // White - table borders
            header: "#96d4d4", // Pale teal - for titles and column names
            cell: "#f6f8ff",   // Ghost white - for regular cells
            over: "#ffcccc",   // Light red - for rows over their allocation
            text: "#202020",   // Near black - for cell text
        }
    }
}

impl Palette {
    pub fn stylesheet(&self) -> String {
        format!(
            r#"
    body {{ font-family: sans-serif; color: {text}; }}
    .grid {{ display: grid; grid-template-columns: 3fr 5fr; grid-gap: 20px; }}
    table {{ border: 1px solid {border}; border-collapse: collapse; width: 100%; margin-bottom: 12px; }}
    th {{ background-color: {header}; text-align: right; }}
    td {{ background-color: {cell}; padding-right: 15px; text-align: right; }}
    td.over {{ background-color: {over}; }}
"#,
            text = self.text,
            border = self.border,
            header = self.header,
            cell = self.cell,
            over = self.over,
        )
    }
}
