use serde::{Deserialize, Serialize};

/// Raw values of the join form, exactly as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationForm {
    pub name: String,
    pub student_id: String,
    pub dept: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

/// A form that passed the required-field check, trimmed and ready to store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    pub student_id: String,
    pub dept: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

impl ApplicationForm {
    /// `None` when name or student id is blank after trimming.
    pub fn validate(&self) -> Option<Application> {
        let name = self.name.trim();
        let student_id = self.student_id.trim();
        if name.is_empty() || student_id.is_empty() {
            return None;
        }
        Some(Application {
            name: name.to_string(),
            student_id: student_id.to_string(),
            dept: self.dept.trim().to_string(),
            phone: self.phone.trim().to_string(),
            interest: self.interest.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_fields_fail_validation() {
        let form = ApplicationForm {
            name: "   ".into(),
            student_id: "20231234".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), None);

        let form = ApplicationForm {
            name: "Kim".into(),
            student_id: "\t".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), None);
    }

    #[test]
    fn validation_trims_free_text_fields() {
        let form = ApplicationForm {
            name: " Kim ".into(),
            student_id: " 20231234".into(),
            dept: "CS ".into(),
            phone: " 010-0000-0000".into(),
            interest: " AI".into(),
            message: "  hi  ".into(),
        };
        let application = form.validate().unwrap();
        assert_eq!(application.name, "Kim");
        assert_eq!(application.student_id, "20231234");
        assert_eq!(application.dept, "CS");
        assert_eq!(application.phone, "010-0000-0000");
        assert_eq!(application.interest, "AI");
        assert_eq!(application.message, "hi");
    }
}
