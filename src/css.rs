use indexmap::IndexMap;
use tracing::debug;

use crate::theme::{HeadingLevel, Px, SizeScale, Theme};

impl Theme {
    /// Flattens the theme into CSS custom properties, keyed by property name.
    ///
    /// Names are `--{prefix}-{token}`, or `--{token}` when `prefix` is empty.
    pub fn css_variables(&self, prefix: &str) -> IndexMap<String, String> {
        let name = |token: &str| {
            if prefix.is_empty() {
                format!("--{token}")
            } else {
                format!("--{prefix}-{token}")
            }
        };

        let mut variables = IndexMap::new();

        variables.insert(name("font-family"), self.font_family.clone());
        variables.insert(
            name("font-family-headings"),
            self.headings.font_family.clone(),
        );
        variables.insert(name("line-height"), self.line_height.to_string());
        variables.insert(name("color-white"), self.white.to_string());
        variables.insert(name("color-black"), self.black.to_string());

        let pixel_scales: [(&str, &SizeScale<Px>); 4] = [
            ("font-size", &self.font_sizes),
            ("radius", &self.radius),
            ("spacing", &self.spacing),
            ("breakpoint", &self.breakpoints),
        ];

        for (token, scale) in pixel_scales {
            for (key, value) in scale.iter() {
                variables.insert(name(&format!("{token}-{key}")), value.to_string());
            }
        }

        for (key, shadow) in self.shadows.iter() {
            variables.insert(name(&format!("shadow-{key}")), shadow.clone());
        }

        for level in HeadingLevel::ALL {
            variables.insert(
                name(&format!("{}-font-size", level.as_str())),
                level.resolve(self).font_size.clone(),
            );
        }

        variables.insert(
            name("radius-default"),
            self.default_radius_px().to_string(),
        );

        debug!(prefix, count = variables.len(), "Generated CSS variables");

        variables
    }

    /// Renders [`Theme::css_variables`] as a single rule for `selector`.
    pub fn to_css(&self, prefix: &str, selector: &str) -> String {
        render_rule(selector, &self.css_variables(prefix))
    }
}

fn render_rule(selector: &str, variables: &IndexMap<String, String>) -> String {
    let mut css = format!("{selector} {{\n");
    for (name, value) in variables {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::render_rule;
    use crate::theme::DEFAULT_THEME;

    #[test]
    fn test_css_variables_cover_every_token() {
        let variables = DEFAULT_THEME.css_variables("tesserae");

        // 5 scalars, 5 scales of 5 keys, 6 headings and the default radius.
        assert_eq!(variables.len(), 5 + 25 + 6 + 1);
        assert_eq!(variables["--tesserae-spacing-xs"], "5px");
        assert_eq!(variables["--tesserae-font-size-xl"], "20px");
        assert_eq!(variables["--tesserae-breakpoint-lg"], "1200px");
        assert_eq!(variables["--tesserae-radius-default"], "8px");
        assert_eq!(variables["--tesserae-h5-font-size"], "0.9375rem");
        assert_eq!(variables["--tesserae-line-height"], "1.55");
        assert_eq!(variables["--tesserae-color-black"], "#303030");
        assert_eq!(variables["--tesserae-shadow-md"], DEFAULT_THEME.shadows.md);
    }

    #[test]
    fn test_css_variables_without_prefix() {
        let variables = DEFAULT_THEME.css_variables("");
        assert_eq!(variables["--spacing-md"], "13px");
        assert!(variables.keys().all(|name| name.starts_with("--") && !name.starts_with("---")));
    }

    #[test]
    fn test_render_rule_layout() {
        let mut variables = IndexMap::new();
        variables.insert("--a".to_owned(), "1px".to_owned());
        variables.insert("--b".to_owned(), "#fff".to_owned());

        assert_eq!(
            render_rule(".app", &variables),
            ".app {\n  --a: 1px;\n  --b: #fff;\n}\n"
        );
        assert_eq!(render_rule(":root", &IndexMap::new()), ":root {\n}\n");
    }

    #[test]
    fn test_to_css_renders_rule() {
        let css = DEFAULT_THEME.to_css("t", ":root");

        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  --t-color-white: #fff;\n"));
        assert!(css.contains("  --t-radius-xl: 34px;\n"));
        assert_eq!(css.lines().count(), 37 + 2);
    }
}
