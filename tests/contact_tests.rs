mod common;

#[cfg(test)]
pub mod contact_tests {
    use truview::common::ContactError;
    use truview::models::*;

    fn filled() -> ContactEnquiry {
        ContactEnquiry::from_fields(
            "Jane Doe",
            "jane@email.com",
            "0400 000 000",
            "Frameless screen, 1200mm wide",
        )
    }

    #[test]
    fn test_contact_enquiry_all_fields_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_contact_enquiry_optional_fields_blank() {
        let enquiry = ContactEnquiry::from_fields("Jane", "jane@email.com", "  ", "");

        assert_eq!(enquiry.phone, None);
        assert_eq!(enquiry.message, None);
        assert_eq!(enquiry.validate(), Ok(()));
    }

    #[test]
    fn test_contact_enquiry_trims_fields() {
        let enquiry = ContactEnquiry::from_fields(" Jane ", " jane@email.com ", " 0400 ", "hi\n");

        assert_eq!(enquiry.name, "Jane");
        assert_eq!(enquiry.email, "jane@email.com");
        assert_eq!(enquiry.phone.as_deref(), Some("0400"));
        assert_eq!(enquiry.message.as_deref(), Some("hi"));
    }

    #[test]
    fn test_contact_enquiry_requires_name() {
        let enquiry = ContactEnquiry::from_fields("   ", "jane@email.com", "", "");
        assert_eq!(enquiry.validate(), Err(ContactError::MissingName));
    }

    #[test]
    fn test_contact_enquiry_requires_email() {
        let enquiry = ContactEnquiry::from_fields("Jane", "", "", "");
        assert_eq!(enquiry.validate(), Err(ContactError::MissingEmail));
    }

    #[test]
    fn test_contact_enquiry_rejects_malformed_email() {
        let enquiry = ContactEnquiry::from_fields("Jane", "jane.email.com", "", "");
        assert_eq!(
            enquiry.validate(),
            Err(ContactError::InvalidEmail("jane.email.com".into()))
        );
    }

    #[test]
    fn test_is_email_shaped_success() {
        for email in ["jane@email.com", "a.b+c@sub.example.com.au", "  x@y.io  "] {
            assert!(is_email_shaped(email), "{email:?}");
        }
    }

    #[test]
    fn test_is_email_shaped_fails() {
        let long_local = format!("{}@email.com", "a".repeat(65));
        let long_total = format!("jane@{}.com", "d".repeat(250));

        for email in [
            "",
            "jane",
            "@email.com",
            "jane@",
            "jane@localhost",
            "jane@@email.com",
            "jane@email@com.au",
            long_local.as_str(),
            long_total.as_str(),
        ] {
            assert!(!is_email_shaped(email), "{email:?}");
        }
    }
}
