//! Lexicon maintenance commands: roots and schemes.

use sarf_core::model::ROOT_LEN;
use sarf_core::{log_op_end, log_op_error, log_op_start};
use sarf_core::{Lexicon, Result, RootEntity, RootType, SarfError, SchemeEntity};

fn elapsed_ms(start: std::time::Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Add a triliteral root to the index
///
/// Surrounding whitespace is ignored. Returns the detected root type.
///
/// # Errors
///
/// - `MalformedRoot`: not exactly three letters
/// - `RootAlreadyExists`: the root is already indexed
pub fn add_root(lexicon: &mut Lexicon, letters: &str) -> Result<RootType> {
    log_op_start!("add_root", root = letters);
    let start = std::time::Instant::now();

    let root_type = add_root_impl(lexicon, letters.trim()).map_err(|e| {
        log_op_error!("add_root", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "add_root",
        duration_ms = elapsed_ms(start),
        root_type = root_type.as_str()
    );
    Ok(root_type)
}

fn add_root_impl(lexicon: &mut Lexicon, letters: &str) -> Result<RootType> {
    let root = RootEntity::new(letters);
    if root.letter_count() != ROOT_LEN {
        return Err(SarfError::MalformedRoot {
            letters: letters.to_string(),
            len: root.letter_count(),
        });
    }

    let root_type = root.root_type();
    if !lexicon.roots_mut().insert(root) {
        return Err(SarfError::RootAlreadyExists {
            letters: letters.to_string(),
        });
    }
    Ok(root_type)
}

fn check_scheme(name: &str, pattern: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SarfError::InvalidScheme {
            reason: "scheme name cannot be empty".to_string(),
        });
    }
    if pattern.trim().is_empty() {
        return Err(SarfError::InvalidScheme {
            reason: format!("pattern for '{}' cannot be empty", name),
        });
    }
    Ok(())
}

/// Add a named scheme to the table
///
/// # Errors
///
/// - `InvalidScheme`: blank name or pattern
/// - `SchemeAlreadyExists`: the name is taken
pub fn add_scheme(lexicon: &mut Lexicon, name: &str, pattern: &str) -> Result<()> {
    log_op_start!("add_scheme", scheme = name);
    let start = std::time::Instant::now();

    let result = check_scheme(name, pattern).and_then(|()| {
        if lexicon.schemes().contains(name) {
            return Err(SarfError::SchemeAlreadyExists {
                name: name.to_string(),
            });
        }
        lexicon
            .schemes_mut()
            .insert(SchemeEntity::new(name, pattern));
        Ok(())
    });

    if let Err(e) = &result {
        log_op_error!("add_scheme", e.clone(), duration_ms = elapsed_ms(start));
        return result;
    }
    log_op_end!(
        "add_scheme",
        duration_ms = elapsed_ms(start),
        scheme_count = lexicon.schemes().len()
    );
    result
}

/// Replace the pattern of an existing scheme
///
/// # Errors
///
/// - `InvalidScheme`: blank pattern
/// - `SchemeNotFound`: no scheme with this name
pub fn modify_scheme(lexicon: &mut Lexicon, name: &str, pattern: &str) -> Result<()> {
    log_op_start!("modify_scheme", scheme = name);
    let start = std::time::Instant::now();

    let result = check_scheme(name, pattern).and_then(|()| {
        if lexicon.schemes_mut().modify(name, pattern) {
            Ok(())
        } else {
            Err(SarfError::SchemeNotFound {
                name: name.to_string(),
            })
        }
    });

    match &result {
        Ok(()) => {
            log_op_end!("modify_scheme", duration_ms = elapsed_ms(start));
        }
        Err(e) => {
            log_op_error!("modify_scheme", e.clone(), duration_ms = elapsed_ms(start));
        }
    }
    result
}

/// Remove a scheme from the table
///
/// # Errors
///
/// - `SchemeNotFound`: no scheme with this name
pub fn delete_scheme(lexicon: &mut Lexicon, name: &str) -> Result<()> {
    log_op_start!("delete_scheme", scheme = name);
    let start = std::time::Instant::now();

    if !lexicon.schemes_mut().delete(name) {
        let err = SarfError::SchemeNotFound {
            name: name.to_string(),
        };
        log_op_error!("delete_scheme", err.clone(), duration_ms = elapsed_ms(start));
        return Err(err);
    }

    log_op_end!("delete_scheme", duration_ms = elapsed_ms(start));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_root_detects_type() {
        let mut lexicon = Lexicon::new();
        assert_eq!(add_root(&mut lexicon, " قول ").unwrap(), RootType::Hollow);
        assert!(lexicon.roots().contains("قول"));
    }

    #[test]
    fn test_add_root_rejects_wrong_length() {
        let mut lexicon = Lexicon::new();
        assert_eq!(
            add_root(&mut lexicon, "كت").unwrap_err(),
            SarfError::MalformedRoot {
                letters: "كت".to_string(),
                len: 2
            }
        );
        assert!(lexicon.roots().is_empty());
    }

    #[test]
    fn test_add_root_rejects_duplicate() {
        let mut lexicon = Lexicon::new();
        add_root(&mut lexicon, "كتب").unwrap();
        assert!(matches!(
            add_root(&mut lexicon, "كتب"),
            Err(SarfError::RootAlreadyExists { .. })
        ));
        assert_eq!(lexicon.roots().len(), 1);
    }

    #[test]
    fn test_scheme_lifecycle() {
        let mut lexicon = Lexicon::new();
        add_scheme(&mut lexicon, "فاعل", "C1اC2C3").unwrap();
        assert!(matches!(
            add_scheme(&mut lexicon, "فاعل", "C1C2C3"),
            Err(SarfError::SchemeAlreadyExists { .. })
        ));

        modify_scheme(&mut lexicon, "فاعل", "C1ّاC2C3").unwrap();
        assert_eq!(lexicon.get_scheme("فاعل").unwrap().pattern(), "C1ّاC2C3");

        delete_scheme(&mut lexicon, "فاعل").unwrap();
        assert!(matches!(
            delete_scheme(&mut lexicon, "فاعل"),
            Err(SarfError::SchemeNotFound { .. })
        ));
    }

    #[test]
    fn test_add_scheme_rejects_blank() {
        let mut lexicon = Lexicon::new();
        assert!(matches!(
            add_scheme(&mut lexicon, "  ", "C1C2C3"),
            Err(SarfError::InvalidScheme { .. })
        ));
        assert!(matches!(
            add_scheme(&mut lexicon, "فعل", ""),
            Err(SarfError::InvalidScheme { .. })
        ));
        assert!(lexicon.schemes().is_empty());
    }
}
