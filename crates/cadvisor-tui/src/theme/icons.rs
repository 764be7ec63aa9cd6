//! Icon set toggled by the `ui.icons` setting.
//!
//! Terminals without good glyph coverage can set `icons = false` to get
//! plain-ASCII markers everywhere.

#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    enabled: bool,
}

impl IconSet {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn pick(self, icon: &'static str, fallback: &'static str) -> &'static str {
        if self.enabled {
            icon
        } else {
            fallback
        }
    }

    pub fn app(self) -> &'static str {
        self.pick("\u{1f9ed}", ">>") // compass
    }

    pub fn online(self) -> &'static str {
        self.pick("\u{25cf}", "*")
    }

    pub fn offline(self) -> &'static str {
        self.pick("\u{25cb}", "o")
    }

    pub fn career(self) -> &'static str {
        self.pick("\u{1f4bc}", "#") // briefcase
    }

    pub fn skill(self) -> &'static str {
        self.pick("\u{2713}", "+") // check mark
    }

    pub fn resource(self) -> &'static str {
        self.pick("\u{1f4da}", "@") // books
    }

    pub fn plan(self) -> &'static str {
        self.pick("\u{1f4c5}", "=") // calendar
    }

    pub fn task(self) -> &'static str {
        self.pick("\u{2022}", "-") // bullet
    }

    pub fn you(self) -> &'static str {
        self.pick("\u{25b6}", ">")
    }

    pub fn bot(self) -> &'static str {
        self.pick("\u{25c0}", "<")
    }
}
