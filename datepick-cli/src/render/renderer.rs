use super::theme::OneDark;
use chrono::NaiveDate;
use datepick_core::{
    CalendarGrid, GridCell, TimeFormat, TimeOfDay, TimeOption, same_month, same_time,
    render::{format_cell, format_month_title, format_weekday_header},
};
use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
    pub time_format: TimeFormat,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    use_color: true,
                    time_format: TimeFormat::default(),
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.print_md(&md);
        } else {
            println!("{message}");
        }
    }

    /// `7.5 -> 07:30 (kept as 07:30)`
    pub fn print_time_line(&self, input: &str, parsed: TimeOfDay, committed: TimeOfDay) {
        let mut parsed = parsed.format(self.opts.time_format);
        let mut committed = committed.format(self.opts.time_format);
        if self.opts.use_color {
            parsed = parsed.with(OneDark::BLUE).to_string();
            committed = committed.with(OneDark::YELLOW).to_string();
        }
        println!("{input} -> {parsed} (kept as {committed})");
    }

    /// One option per line; `current` is marked.
    pub fn print_options(&self, options: &[&TimeOption], current: Option<TimeOfDay>) {
        for option in options {
            let is_current = same_time(Some(option.time), current);
            let line = match (is_current, self.opts.use_color) {
                (true, true) => format!("{}", option.label.as_str().with(OneDark::GREEN).bold()),
                (true, false) => format!("{} *", option.label),
                (false, _) => option.label.clone(),
            };
            println!("{line}");
        }
    }

    pub fn print_month(
        &self,
        grid: &CalendarGrid,
        labels: &[String],
        selection: &[NaiveDate],
        today: NaiveDate,
    ) {
        let title = format_month_title(grid.first_day());
        if self.opts.use_color {
            self.print_md(&format!("## {title}"));
        } else {
            println!("{title}");
        }

        let mut header = format_weekday_header(labels);
        if self.opts.use_color {
            header = header.with(OneDark::CYAN).to_string();
        }
        println!("{header}");

        // Only mark today when it is in the month shown.
        let today = same_month(Some(today), Some(grid.first_day())).then_some(today);
        for row in grid.rows() {
            let line = row
                .iter()
                .map(|cell| self.style_cell(cell, selection, today))
                .collect::<Vec<_>>()
                .join(" ");
            println!("{line}");
        }
    }

    fn style_cell(&self, cell: &GridCell, selection: &[NaiveDate], today: Option<NaiveDate>) -> String {
        let text = format_cell(cell);
        let Some(day) = cell.as_day() else {
            return text;
        };
        if !self.opts.use_color {
            return if day.disabled() { "--".to_string() } else { text };
        }

        if selection.contains(&day.date()) {
            text.with(OneDark::YELLOW).attribute(Attribute::Bold).to_string()
        } else if day.in_range() {
            text.with(OneDark::BLUE).to_string()
        } else if day.disabled() {
            text.with(OneDark::COMMENT).to_string()
        } else if today == Some(day.date()) {
            text.with(OneDark::GREEN).attribute(Attribute::Underlined).to_string()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datepick_core::{DateBounds, WeekStart};

    fn plain() -> Renderer {
        Renderer::new(Some(RenderOptions {
            use_color: false,
            time_format: TimeFormat::TwentyFourHour,
        }))
    }

    #[test]
    fn plain_cells_hide_disabled_days() {
        let first = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let mut grid = CalendarGrid::build(first, WeekStart::Monday);
        grid.annotate(
            &DateBounds::new(NaiveDate::from_ymd_opt(2025, 10, 5), None),
            &[],
        );
        let renderer = plain();
        let cells: Vec<String> = grid.cells()[..8]
            .iter()
            .map(|cell| renderer.style_cell(cell, &[], Some(first)))
            .collect();
        assert_eq!(cells, ["  ", "  ", "--", "--", "--", "--", " 5", " 6"]);
    }
}
