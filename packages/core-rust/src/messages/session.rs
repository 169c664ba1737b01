//! Operations of the vSphere `SessionManager` used to open a session on the
//! vSAN service endpoint.

use crate::types::{DynamicData, UserSession};

crate::soap_messages! {
    /// Authenticates with a user name and password.
    Login => LoginResponse {
        user_name: String,
        password: String,
        locale?: String,
    } -> UserSession;

    /// Authenticates with a SAML token presented by the transport.
    LoginByToken => LoginByTokenResponse {
        locale?: String,
    } -> UserSession;

    /// Exchanges a clone ticket for a session on this endpoint.
    CloneSession => CloneSessionResponse {
        clone_ticket: String,
    } -> UserSession;

    AcquireCloneTicket => AcquireCloneTicketResponse {} -> String;

    SessionIsActive => SessionIsActiveResponse {
        session_id: String,
        user_name: String,
    } -> bool;

    Logout => LogoutResponse {};

    /// Terminates other sessions; the caller's own session cannot be listed.
    TerminateSession => TerminateSessionResponse {
        session_id: Vec<String>,
    };

    SetLocale => SetLocaleResponse {
        locale: String,
    };

    UpdateServiceMessage => UpdateServiceMessageResponse {
        message: String,
    };

    AcquireGenericServiceTicket => AcquireGenericServiceTicketResponse {
        spec: DynamicData,
    } -> DynamicData;

    AcquireLocalTicket => AcquireLocalTicketResponse {
        user_name: String,
    } -> DynamicData;

    LoginBySSPI => LoginBySSPIResponse {
        base64_token: String,
        locale?: String,
    } -> UserSession;

    LoginExtensionByCertificate => LoginExtensionByCertificateResponse {
        extension_key: String,
        locale?: String,
    } -> UserSession;

    LoginExtensionBySubjectName => LoginExtensionBySubjectNameResponse {
        extension_key: String,
        locale?: String,
    } -> UserSession;

    ImpersonateUser => ImpersonateUserResponse {
        user_name: String,
        locale?: String,
    } -> UserSession;
}
