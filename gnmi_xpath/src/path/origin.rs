//! Origin resolution strategies
//!
//! The builder never derives an origin from expression text. A policy
//! chosen by the caller decides what ends up in `Path::origin`.

use super::error::{PathError, PathResult};
use super::types::Path;
use crate::log_debug;
use std::fmt;

/// Resolves the origin of a freshly built path
pub trait OriginPolicy: fmt::Debug + Send + Sync {
    /// Short name used in logs and CLI output
    fn name(&self) -> &'static str;

    /// Produce the final path given the caller-supplied origin
    fn apply(&self, path: Path, supplied: Option<&str>) -> PathResult<Path>;
}

fn non_empty(origin: Option<&str>) -> Option<&str> {
    origin.filter(|o| !o.is_empty())
}

/// Origin exactly as supplied, with an empty string meaning none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassThrough;

impl OriginPolicy for PassThrough {
    fn name(&self) -> &'static str {
        "pass-through"
    }

    fn apply(&self, path: Path, supplied: Option<&str>) -> PathResult<Path> {
        Ok(path.with_origin(non_empty(supplied).map(str::to_string)))
    }
}

/// Always the configured origin; a different supplied origin is an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedOrigin {
    origin: String,
}

impl FixedOrigin {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl OriginPolicy for FixedOrigin {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn apply(&self, path: Path, supplied: Option<&str>) -> PathResult<Path> {
        match non_empty(supplied) {
            Some(origin) if origin != self.origin => Err(PathError::OriginRejected {
                supplied: origin.to_string(),
                required: self.origin.clone(),
            }),
            _ => Ok(path.with_origin(Some(self.origin.clone()))),
        }
    }
}

/// Takes the origin from a module-qualified first element
/// (`openconfig-interfaces:interfaces`) when none is supplied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModulePrefix;

impl OriginPolicy for ModulePrefix {
    fn name(&self) -> &'static str {
        "module-prefix"
    }

    fn apply(&self, mut path: Path, supplied: Option<&str>) -> PathResult<Path> {
        if let Some(origin) = non_empty(supplied) {
            return Ok(path.with_origin(Some(origin.to_string())));
        }

        let split = path.first_element_mut().and_then(|element| {
            let (module, name) = element.name().split_once(':')?;
            if module.is_empty() || name.is_empty() {
                return None;
            }
            let (module, name) = (module.to_string(), name.to_string());
            element.set_name(name);
            Some(module)
        });

        if let Some(module) = &split {
            log_debug!("Origin taken from module prefix", "origin" => module);
        }

        Ok(path.with_origin(split))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathElement;
    use assert_matches::assert_matches;

    fn path(first: &str) -> Path {
        Path::new(
            None,
            vec![PathElement::new(first), PathElement::new("interface")],
        )
    }

    #[test]
    fn test_pass_through() {
        let resolved = PassThrough.apply(path("a"), Some("openconfig")).unwrap();
        assert_eq!(resolved.origin(), Some("openconfig"));

        let resolved = PassThrough.apply(path("a"), Some("")).unwrap();
        assert_eq!(resolved.origin(), None);

        let resolved = PassThrough.apply(path("m:a"), None).unwrap();
        assert_eq!(resolved.origin(), None);
        assert_eq!(resolved.element(0).unwrap().name(), "m:a");
    }

    #[test]
    fn test_fixed_origin() {
        let policy = FixedOrigin::new("openconfig");
        assert_eq!(
            policy.apply(path("a"), None).unwrap().origin(),
            Some("openconfig")
        );
        assert_eq!(
            policy.apply(path("a"), Some("openconfig")).unwrap().origin(),
            Some("openconfig")
        );
        assert_matches!(
            policy.apply(path("a"), Some("rfc7951")),
            Err(PathError::OriginRejected { ref supplied, ref required })
                if supplied == "rfc7951" && required == "openconfig"
        );
    }

    #[test]
    fn test_module_prefix() {
        let resolved = ModulePrefix
            .apply(path("openconfig-interfaces:interfaces"), None)
            .unwrap();
        assert_eq!(resolved.origin(), Some("openconfig-interfaces"));
        assert_eq!(resolved.element(0).unwrap().name(), "interfaces");
        assert_eq!(resolved.element(1).unwrap().name(), "interface");
    }

    #[test]
    fn test_module_prefix_defers_to_supplied_origin() {
        let resolved = ModulePrefix
            .apply(path("openconfig-interfaces:interfaces"), Some("cli"))
            .unwrap();
        assert_eq!(resolved.origin(), Some("cli"));
        assert_eq!(
            resolved.element(0).unwrap().name(),
            "openconfig-interfaces:interfaces"
        );
    }

    #[test]
    fn test_module_prefix_without_prefix() {
        assert_eq!(ModulePrefix.apply(path("a"), None).unwrap().origin(), None);
        assert_eq!(ModulePrefix.apply(path(":a"), None).unwrap().origin(), None);
        assert_eq!(
            ModulePrefix.apply(Path::default(), None).unwrap().origin(),
            None
        );
    }
}
