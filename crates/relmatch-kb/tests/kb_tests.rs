use relmatch_kb::{builtin, KnowledgeBase, RegionMapping, ServiceMapping, DEFAULT_WEIGHT};

fn keys(kb: &KnowledgeBase, texts: &[&str]) -> Vec<String> {
    kb.mentioned_regions(texts.iter().copied()).into_iter().map(|r| r.key().to_string()).collect()
}

#[test]
fn lookup_is_case_insensitive_and_keeps_alias_order() {
    let kb = builtin();
    let entry = kb.service("Microsoft.Compute/virtualMachines").expect("vm mapping");
    let names: Vec<&str> = entry.aliases().iter().map(|a| a.name()).collect();
    assert_eq!(names.first(), Some(&"Virtual Machines"));
    assert!((kb.weight("MICROSOFT.COMPUTE/VIRTUALMACHINES") - 0.9).abs() < 1e-12);
}

#[test]
fn unknown_types_get_default_weight_and_no_aliases() {
    let kb = builtin();
    assert!(kb.service("contoso.widgets/gadgets").is_none());
    assert!(kb.aliases("contoso.widgets/gadgets").is_empty());
    assert!((kb.weight("contoso.widgets/gadgets") - DEFAULT_WEIGHT).abs() < 1e-12);
}

#[test]
fn region_equivalence_uses_aliases() {
    let kb = builtin();
    assert!(kb.regions_equivalent("westeurope", "West Europe"));
    assert!(kb.regions_equivalent("East US", "eus"));
    assert!(kb.regions_equivalent("anything-at-all", "Anything at all"), "identical after normalization");
    assert!(!kb.regions_equivalent("westeurope", "eastus"));
    assert!(!kb.regions_equivalent("eastus", "eastus2"));
}

#[test]
fn longest_region_alias_wins_on_overlap() {
    let kb = builtin();
    assert_eq!(keys(kb, &["Now in East US 2"]), vec!["eastus2"]);
    assert_eq!(keys(kb, &["Now in East US and East US 2"]), vec!["eastus", "eastus2"]);
}

#[test]
fn region_mentions_span_all_texts_and_skip_global() {
    let kb = builtin();
    let found = keys(kb, &["Available in West Europe", "", "North Europe"]);
    assert_eq!(found, vec!["northeurope", "westeurope"], "declaration order, not text order");
    assert!(keys(kb, &["Rolling out to all regions worldwide"]).is_empty());
    assert!(keys(kb, &["No location here"]).is_empty());
}

#[test]
fn custom_tables_behave_like_builtin() {
    let kb = KnowledgeBase::new(
        vec![
            ServiceMapping::new("Contoso.Compute/virtualMachines", ["Virtual Machines", "VM"], 0.9),
            ServiceMapping::new("contoso.compute/virtualmachines", ["VMs"], 0.5),
        ],
        vec![RegionMapping::new("north", "North", ["North", "n1"])],
    )
    .expect("compile");
    assert_eq!(kb.services().len(), 1, "duplicate keys collapse");
    assert!((kb.weight("contoso.compute/virtualmachines") - 0.5).abs() < 1e-12, "later mapping wins");
    assert!(kb.regions_equivalent("n1", "NORTH"));
    let alias = &kb.aliases("contoso.compute/virtualmachines")[0];
    assert!(alias.occurs_as_word("Two new VMs shipped"));
    assert!(!alias.occurs_as_word("VMsomething"));
    assert!(alias.contained_in_lower("vmsomething"));
}
