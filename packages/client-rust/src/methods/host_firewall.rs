//! Stubs of the per-host firewall.

soap_methods! {
    managed_object: "HostFirewallSystem";
    messages: host_config;

    enable_ruleset => EnableRuleset;
    disable_ruleset => DisableRuleset;
    update_ruleset => UpdateRuleset;
    refresh_firewall => RefreshFirewall;
    update_default_policy => UpdateDefaultPolicy;
}
