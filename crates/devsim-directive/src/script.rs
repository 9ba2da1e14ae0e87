//! Directive script text: a `# device <n>` header per identity, its
//! directive lines, then a blank line.

use std::fmt;

use crate::directive::Directive;

/// Directive lists of a batch, displayed as script text.
struct Script<'a>(&'a [Vec<Directive>]);

impl fmt::Display for Script<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, directives) in self.0.iter().enumerate() {
            writeln!(f, "# device {}", index + 1)?;
            for directive in directives {
                writeln!(f, "{directive}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn render_script(scripts: &[Vec<Directive>]) -> String {
    Script(scripts).to_string()
}
