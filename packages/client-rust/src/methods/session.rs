//! Stubs of the session manager.

soap_methods! {
    managed_object: "SessionManager";
    messages: session;

    /// The transport is expected to keep the returned session cookie.
    login => Login;
    login_by_token => LoginByToken;
    clone_session => CloneSession;
    acquire_clone_ticket => AcquireCloneTicket;
    session_is_active => SessionIsActive;
    logout => Logout;
    terminate_session => TerminateSession;
    set_locale => SetLocale;
    update_service_message => UpdateServiceMessage;
    acquire_generic_service_ticket => AcquireGenericServiceTicket;
    acquire_local_ticket => AcquireLocalTicket;
    login_by_sspi => LoginBySSPI;
    login_extension_by_certificate => LoginExtensionByCertificate;
    login_extension_by_subject_name => LoginExtensionBySubjectName;
    impersonate_user => ImpersonateUser;
}
