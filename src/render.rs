//! Plain text rendering of a loaded module

use crate::module::{Attribute, ModuleHandle};
use crate::version::descriptor::VersionInfo;

/// `module: <version>` followed by one `<label>: <value>` line per dependency
pub fn text(handle: &ModuleHandle) -> String {
    let mut lines = vec![format!("module: {}", handle.module())];
    lines.extend(externals_lines(handle.externals()));
    lines.join("\n")
}

pub fn attribute_text(attribute: Attribute<'_>) -> String {
    match attribute {
        Attribute::Str(value) => value.to_string(),
        Attribute::Map(externals) => externals_lines(externals).collect::<Vec<_>>().join("\n"),
    }
}

fn externals_lines(externals: &VersionInfo) -> impl Iterator<Item = String> + '_ {
    externals
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::probe::{FixedProbe, VersionProbe};
    use crate::version::value::VersionValue;

    fn handle() -> ModuleHandle {
        let probes: Vec<Box<dyn VersionProbe>> = vec![
            Box::new(FixedProbe::new("Blitz++", "0.10")),
            Box::new(FixedProbe::new(
                "Compiler",
                VersionValue::fields([("name", "rustc"), ("version", "1.82.0")]),
            )),
        ];
        ModuleHandle::load_versioned("2.0.1", probes).unwrap()
    }

    #[test]
    fn text_lists_module_then_externals_in_order() {
        assert_eq!(
            text(&handle()),
            "module: 2.0.1\nBlitz++: 0.10\nCompiler: name=rustc, version=1.82.0"
        );
    }

    #[test]
    fn attribute_text_prints_single_attribute() {
        let handle = handle();

        assert_eq!(
            attribute_text(handle.attribute("module").unwrap()),
            "2.0.1"
        );
        assert_eq!(
            attribute_text(handle.attribute("externals").unwrap()),
            "Blitz++: 0.10\nCompiler: name=rustc, version=1.82.0"
        );
    }
}
