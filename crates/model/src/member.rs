use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::date;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Member {
    pub id: i64,
    pub member_id: i64,
    pub firstname: String,
    pub middlename: String,
    pub lastname: String,
    pub gender: String,
    pub contact: String,
    pub address: String,
    pub email: String,
    pub date_created: String,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        date::parse_created(&self.date_created)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_full_name_skips_middlename() {
        let member = Member {
            id: 5,
            member_id: 58487246,
            firstname: "Mike".to_string(),
            middlename: "D".to_string(),
            lastname: "Williams".to_string(),
            gender: "Male".to_string(),
            contact: "+14526-5455-44".to_string(),
            address: "Sample Address".to_string(),
            email: "mwilliams@sample.com".to_string(),
            date_created: "2020-10-21 13:18:19".to_string(),
        };
        assert_eq!(member.full_name(), "Mike Williams");
        assert!(member.created_at().is_some());
    }
}
