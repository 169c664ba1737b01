//! The request/response/fault container of one operation call.

use std::any::Any;
use std::fmt;

use vsan_core::{ManagedObjectReference, Method, SoapFault};

use crate::error::SoapError;
use crate::transport::RoundTripBody;

/// Container for one call: borrows the request, receives the response or fault.
///
/// An envelope is built fresh for every invocation, handed to the transport
/// as a [`RoundTripBody`], and dropped when the stub returns.
pub struct Envelope<'a, M: Method> {
    request: &'a M,
    response: Option<M::Response>,
    fault: Option<SoapFault>,
}

impl<'a, M: Method> Envelope<'a, M> {
    #[must_use]
    pub fn new(request: &'a M) -> Self {
        Self {
            request,
            response: None,
            fault: None,
        }
    }

    #[must_use]
    pub fn request(&self) -> &'a M {
        self.request
    }

    #[must_use]
    pub fn response(&self) -> Option<&M::Response> {
        self.response.as_ref()
    }

    /// Installs a typed response, replacing any previous one.
    pub fn set_response(&mut self, response: M::Response) {
        self.response = Some(response);
    }

    /// Consumes the envelope, yielding the response if one was installed.
    #[must_use]
    pub fn into_response(self) -> Option<M::Response> {
        self.response
    }
}

impl<M: Method> fmt::Debug for Envelope<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("operation", &M::OPERATION)
            .field("this", self.request.this())
            .field("has_response", &self.response.is_some())
            .field("fault", &self.fault)
            .finish()
    }
}

impl<M: Method> RoundTripBody for Envelope<'_, M> {
    fn operation(&self) -> &'static str {
        M::OPERATION
    }

    fn this(&self) -> &ManagedObjectReference {
        self.request.this()
    }

    fn request_json(&self) -> Result<serde_json::Value, SoapError> {
        serde_json::to_value(self.request).map_err(|source| SoapError::Encode {
            operation: M::OPERATION,
            source,
        })
    }

    fn request_any(&self) -> &dyn Any {
        self.request
    }

    fn set_response_json(&mut self, value: serde_json::Value) -> Result<(), SoapError> {
        let response = serde_json::from_value(value).map_err(|source| SoapError::Decode {
            operation: M::OPERATION,
            source,
        })?;
        self.response = Some(response);
        Ok(())
    }

    fn set_response_any(&mut self, response: Box<dyn Any + Send>) -> Result<(), Box<dyn Any + Send>> {
        let response = response.downcast::<M::Response>()?;
        self.response = Some(*response);
        Ok(())
    }

    fn has_response(&self) -> bool {
        self.response.is_some()
    }

    fn fault(&self) -> Option<&SoapFault> {
        self.fault.as_ref()
    }

    fn set_fault(&mut self, fault: SoapFault) {
        self.fault = Some(fault);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vsan_core::messages::session::{Login, LoginResponse};
    use vsan_core::messages::space::VsanQuerySpaceUsage;
    use vsan_core::well_known;

    use super::*;

    fn login() -> Login {
        Login {
            this: well_known::session_manager(),
            user_name: "administrator@vsphere.local".to_string(),
            password: "secret".to_string(),
            locale: None,
        }
    }

    #[test]
    fn body_exposes_operation_and_target() {
        let req = login();
        let envelope = Envelope::new(&req);
        let body: &dyn RoundTripBody = &envelope;
        assert_eq!(body.operation(), "Login");
        assert_eq!(body.this(), &well_known::session_manager());
        assert!(!body.has_response());
        assert!(body.fault().is_none());
    }

    #[test]
    fn request_any_is_the_borrowed_request() {
        let req = login();
        let envelope = Envelope::new(&req);
        let body: &dyn RoundTripBody = &envelope;
        let seen = body.request::<Login>().unwrap();
        assert!(std::ptr::eq(seen, &req));
        assert!(body.request::<VsanQuerySpaceUsage>().is_none());
    }

    #[test]
    fn json_response_is_decoded_into_typed_response() {
        let req = login();
        let mut envelope = Envelope::new(&req);
        envelope
            .set_response_json(json!({"returnval": {"key": "52a1", "userName": "root"}}))
            .unwrap();
        let resp = envelope.into_response().unwrap();
        assert_eq!(resp.returnval.key, "52a1");
        assert_eq!(resp.returnval.user_name, "root");
    }

    #[test]
    fn malformed_json_response_is_a_decode_error() {
        let req = login();
        let mut envelope = Envelope::new(&req);
        let err = envelope
            .set_response_json(json!({"returnval": "not a session"}))
            .unwrap_err();
        assert!(matches!(err, SoapError::Decode { operation: "Login", .. }));
        assert!(!envelope.has_response());
    }

    #[test]
    fn typed_response_must_match_operation() {
        let req = login();
        let mut envelope = Envelope::new(&req);
        let body: &mut dyn RoundTripBody = &mut envelope;
        assert!(!body.respond(42_u32));
        assert!(body.respond(LoginResponse::default()));
        assert!(body.has_response());
    }

    #[test]
    fn fault_is_kept_alongside_response() {
        let req = login();
        let mut envelope = Envelope::new(&req);
        envelope.set_response(LoginResponse::default());
        envelope.set_fault(SoapFault::server("late", vsan_core::FaultKind::RuntimeFault));
        assert!(envelope.fault().is_some());
        assert!(envelope.response().is_some());
    }
}
