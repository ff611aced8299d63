// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::catalog::Catalog;
use crate::catalog::Severity;
use crate::collection::resolve_directory;
use crate::config::Config;
use crate::error::ErrorReport;
use crate::error::Fallible;

pub fn check_catalog(directory: Option<String>) -> Fallible<()> {
    let directory = resolve_directory(directory)?;
    let config = Config::load(&directory)?;
    let catalog = Catalog::load(&directory.join(&config.catalog))?;
    let problems = catalog.validate();
    for problem in problems.iter() {
        println!("{problem}");
    }
    let errors = problems
        .iter()
        .filter(|p| p.severity == Severity::Error)
        .count();
    if errors > 0 {
        return Err(ErrorReport::integrity(format!(
            "{errors} errors in the catalog."
        )));
    }
    println!("ok: {} characters", catalog.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::check_catalog;
    use crate::error::ErrorKind;
    use crate::error::Fallible;
    use crate::helper::create_tmp_copy_of_test_directory;

    #[test]
    fn test_non_existent_directory() {
        assert!(check_catalog(Some("./derpherp".to_string())).is_err());
    }

    #[test]
    fn test_directory() {
        assert!(check_catalog(Some("./test".to_string())).is_ok());
    }

    #[test]
    fn test_broken_catalog() -> Fallible<()> {
        let directory = create_tmp_copy_of_test_directory()?;
        let path = std::path::Path::new(&directory).join("chars.json");
        write(&path, r#"[{"char": "山", "pinyin": "shān", "strokes": 0}]"#)?;
        let err = check_catalog(Some(directory)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
        Ok(())
    }

    #[test]
    fn test_unparseable_catalog() -> Fallible<()> {
        let directory = create_tmp_copy_of_test_directory()?;
        let path = std::path::Path::new(&directory).join("chars.json");
        write(&path, "{ not json")?;
        let err = check_catalog(Some(directory)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
        Ok(())
    }
}
