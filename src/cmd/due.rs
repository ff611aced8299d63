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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::lesson::review_queue;
use crate::types::date::Date;
use crate::types::timestamp::Timestamp;

pub fn list_due(directory: Option<String>, today: Option<Date>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let today = today.unwrap_or(Timestamp::now().date());
    let queue = review_queue(&coll.db, today)?;
    if queue.is_empty() {
        println!("Nothing due on {today}.");
        return Ok(());
    }
    for record in queue {
        println!("{record}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_copy_of_test_directory;

    #[test]
    fn test_list_due() -> Fallible<()> {
        let directory = create_tmp_copy_of_test_directory()?;
        assert!(list_due(Some(directory.clone()), None).is_ok());
        assert!(list_due(Some(directory), Some("2024-01-01".parse()?)).is_ok());
        Ok(())
    }
}
