//! Stubs of roles and permissions.

soap_methods! {
    managed_object: "AuthorizationManager";
    messages: admin;

    add_authorization_role => AddAuthorizationRole;
    remove_authorization_role => RemoveAuthorizationRole;
    update_authorization_role => UpdateAuthorizationRole;
    merge_permissions => MergePermissions;
    retrieve_role_permissions => RetrieveRolePermissions;
    retrieve_entity_permissions => RetrieveEntityPermissions;
    retrieve_all_permissions => RetrieveAllPermissions;
    set_entity_permissions => SetEntityPermissions;
    reset_entity_permissions => ResetEntityPermissions;
    remove_entity_permission => RemoveEntityPermission;
    has_privilege_on_entity => HasPrivilegeOnEntity;
    has_privilege_on_entities => HasPrivilegeOnEntities;
    has_user_privilege_on_entities => HasUserPrivilegeOnEntities;
    fetch_user_privilege_on_entities => FetchUserPrivilegeOnEntities;
}
