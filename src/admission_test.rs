use super::*;

fn request_from(forwarded_for: Option<&str>, client_ip: Option<&str>) -> InboundRequest {
    let mut request = InboundRequest::new("POST", "/model/invoke");
    if let Some(value) = forwarded_for {
        request
            .headers
            .set_single(header::X_FORWARDED_FOR, "X-Forwarded-For", value);
    }
    request.client_ip = client_ip.map(str::to_string);
    request
}

mod client_address {
    use super::*;

    #[test]
    fn forwarded_for_should_use_first_list_entry() {
        // Arrange
        let request = request_from(Some("5.6.7.8, 1.2.3.4"), None);

        // Act & Assert
        assert_eq!(
            AdmissionSource::ForwardedFor.client_address(&request),
            Some("5.6.7.8")
        );
    }

    #[test]
    fn forwarded_for_should_be_none_when_header_absent() {
        // Arrange
        let request = request_from(None, Some("1.2.3.4"));

        // Act & Assert
        assert_eq!(AdmissionSource::ForwardedFor.client_address(&request), None);
    }

    #[test]
    fn forwarded_for_should_be_none_when_first_entry_blank() {
        // Arrange
        let request = request_from(Some(" , 1.2.3.4"), None);

        // Act & Assert
        assert_eq!(AdmissionSource::ForwardedFor.client_address(&request), None);
    }

    #[test]
    fn client_ip_should_read_request_attribute() {
        // Arrange
        let request = request_from(Some("5.6.7.8"), Some("1.2.3.4"));

        // Act & Assert
        assert_eq!(
            AdmissionSource::ClientIp.client_address(&request),
            Some("1.2.3.4")
        );
    }
}

mod parse {
    use super::*;

    #[test]
    fn should_accept_ipv4_and_ipv6_literals() {
        // Arrange
        let ips = AllowedIps::list(["1.2.3.4", " 2001:db8::1 "]);

        // Act
        let parsed = ips.parse();

        // Assert
        assert!(parsed.is_ok());
    }

    #[test]
    fn should_report_first_invalid_literal() {
        // Arrange
        let ips = AllowedIps::list(["1.2.3.4", "10.0.0.0/8", "nope"]);

        // Act
        let result = ips.parse();

        // Assert
        assert!(matches!(result, Err((literal, _)) if literal == "10.0.0.0/8"));
    }
}

mod admits {
    use super::*;

    fn allow_list(values: &[&str]) -> ParsedAllowList {
        AllowedIps::list(values.iter().copied())
            .parse()
            .expect("valid literals")
    }

    #[test]
    fn should_admit_everything_when_list_empty() {
        // Arrange
        let list = allow_list(&[]);

        // Act & Assert
        assert!(list.admits(None));
        assert!(list.admits(Some("5.6.7.8")));
        assert!(list.admits(Some("garbage")));
    }

    #[test]
    fn should_admit_member_address() {
        assert!(allow_list(&["1.2.3.4"]).admits(Some("1.2.3.4")));
    }

    #[test]
    fn should_reject_non_member_address() {
        assert!(!allow_list(&["1.2.3.4"]).admits(Some("5.6.7.8")));
    }

    #[test]
    fn should_admit_missing_address_by_default() {
        assert!(allow_list(&["1.2.3.4"]).admits(None));
    }

    #[test]
    fn should_reject_missing_address_when_required() {
        // Arrange
        let list = allow_list(&["1.2.3.4"]).requiring_address(true);

        // Act & Assert
        assert!(!list.admits(None));
        assert!(list.admits(Some("1.2.3.4")));
    }

    #[test]
    fn should_ignore_required_address_when_list_empty() {
        assert!(allow_list(&[]).requiring_address(true).admits(None));
    }

    #[test]
    fn should_reject_unparseable_address_when_enabled() {
        assert!(!allow_list(&["1.2.3.4"]).admits(Some("1.2.3.4:443")));
    }

    #[test]
    fn should_compare_ipv6_addresses_by_value() {
        assert!(allow_list(&["2001:db8::1"]).admits(Some("2001:0db8:0:0::1")));
    }
}
