use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<&'static str, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &'static str, long: &'static str, description: &'static str) -> Self {
        Flag {
            short,
            long,
            description,
            takes_value: false,
            value: None,
        }
    }

    fn option(short: &'static str, long: &'static str, description: &'static str) -> Self {
        Flag {
            takes_value: true,
            ..Flag::switch(short, long, description)
        }
    }

    fn matches(&self, arg: &str) -> bool {
        arg == self.short || arg == self.long
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert("help", Flag::switch("-h", "--help", "Print this help message"));
        flags.insert("version", Flag::switch("-v", "--version", "Show version information"));
        flags.insert(
            "config",
            Flag::option("-c", "--config", "Run this startup file instead of ~/.simshrc"),
        );
        flags.insert("norc", Flag::switch("-n", "--norc", "Skip the startup file"));
        flags.insert("quiet", Flag::switch("-q", "--quiet", "Suppress banner and hints"));
        flags.insert("debug", Flag::switch("-d", "--debug", "Enable debug logging"));

        Flags { flags }
    }

    /// Unrecognized arguments are ignored.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            let Some(flag) = self.flags.values_mut().find(|f| f.matches(arg)) else {
                continue;
            };

            if flag.takes_value {
                let value = args
                    .next()
                    .ok_or_else(|| ShellError::FlagError(format!("Flag {} requires a value", arg)))?;
                flag.value = Some(value.clone());
            } else {
                flag.value = Some("true".to_string());
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn help_text(&self) -> String {
        let mut text = String::from("Usage: simsh [OPTIONS]\n\nOptions:\n");
        for flag in self.flags.values() {
            let long = if flag.takes_value {
                format!("{} <path>", flag.long)
            } else {
                flag.long.to_string()
            };
            text.push_str(&format!("  {}, {:<17} {}\n", flag.short, long, flag.description));
        }
        text
    }

    pub fn print_help(&self) {
        print!("{}", self.help_text());
    }
}
