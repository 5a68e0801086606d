//! Runtime configuration (kernel overrides).
//!
//! The table kernel is the default. The bitwise reference kernel can be forced
//! for debugging or auditing through `CRCFAST_FORCE`:
//!
//! | Value | Kernel |
//! |-------|--------|
//! | `auto` (or unset) | table |
//! | `table`, `sarwate`, `portable` | table |
//! | `reference`, `bitwise` | bitwise reference |
//!
//! The environment is read once per process under `std`. Without `std` the
//! defaults apply.

/// Forced kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Force {
  /// Use the default selector.
  #[default]
  Auto,
  /// Force the Sarwate table kernel.
  Table,
  /// Force the bitwise reference implementation (slow, obviously correct).
  Reference,
}

impl Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Table => "table",
      Self::Reference => "reference",
    }
  }
}

/// Full runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcConfig {
  /// Requested force mode (env).
  pub requested_force: Force,
  /// Kernel actually used. Never `Auto`.
  pub effective_force: Force,
}

impl CrcConfig {
  /// Name of the active kernel.
  #[inline]
  #[must_use]
  pub const fn backend_name(&self) -> &'static str {
    match self.effective_force {
      Force::Reference => "reference/bitwise",
      Force::Auto | Force::Table => "portable/table",
    }
  }
}

/// Parse a force value. Empty or unrecognized values yield `None`.
#[must_use]
pub fn parse_force(value: &str) -> Option<Force> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  if value.eq_ignore_ascii_case("auto") {
    return Some(Force::Auto);
  }
  if value.eq_ignore_ascii_case("table")
    || value.eq_ignore_ascii_case("sarwate")
    || value.eq_ignore_ascii_case("portable")
  {
    return Some(Force::Table);
  }
  if value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bitwise") {
    return Some(Force::Reference);
  }

  None
}

#[cfg(feature = "std")]
fn read_env_force() -> Force {
  std::env::var("CRCFAST_FORCE")
    .ok()
    .and_then(|v| parse_force(&v))
    .unwrap_or(Force::Auto)
}

#[cfg(not(feature = "std"))]
fn read_env_force() -> Force {
  Force::Auto
}

#[inline]
#[must_use]
fn resolve(requested_force: Force) -> CrcConfig {
  let effective_force = match requested_force {
    Force::Auto | Force::Table => Force::Table,
    Force::Reference => Force::Reference,
  };
  CrcConfig {
    requested_force,
    effective_force,
  }
}

/// Cached process-wide configuration.
#[inline]
#[must_use]
pub fn get() -> CrcConfig {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<CrcConfig> = OnceLock::new();
    *CACHED.get_or_init(|| resolve(read_env_force()))
  }

  #[cfg(not(feature = "std"))]
  {
    resolve(read_env_force())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_known_values() {
    assert_eq!(parse_force("auto"), Some(Force::Auto));
    assert_eq!(parse_force("AUTO"), Some(Force::Auto));
    assert_eq!(parse_force("table"), Some(Force::Table));
    assert_eq!(parse_force("Sarwate"), Some(Force::Table));
    assert_eq!(parse_force(" portable "), Some(Force::Table));
    assert_eq!(parse_force("reference"), Some(Force::Reference));
    assert_eq!(parse_force("BITWISE"), Some(Force::Reference));
  }

  #[test]
  fn parse_rejects_unknown() {
    assert_eq!(parse_force(""), None);
    assert_eq!(parse_force("   "), None);
    assert_eq!(parse_force("clmul"), None);
    assert_eq!(parse_force("slice8"), None);
  }

  #[test]
  fn auto_resolves_to_table() {
    let cfg = resolve(Force::Auto);
    assert_eq!(cfg.requested_force, Force::Auto);
    assert_eq!(cfg.effective_force, Force::Table);
    assert_eq!(cfg.backend_name(), "portable/table");
    assert_eq!(resolve(Force::Reference).backend_name(), "reference/bitwise");
  }

  #[test]
  fn get_is_stable_and_never_auto() {
    let a = get();
    let b = get();
    assert_eq!(a, b);
    assert_ne!(a.effective_force, Force::Auto);
  }

  #[test]
  fn force_names() {
    for force in [Force::Auto, Force::Table, Force::Reference] {
      assert_eq!(parse_force(force.as_str()), Some(force));
    }
  }
}
