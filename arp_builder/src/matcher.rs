//! Structural key resolution over the grammar tree.
//!
//! `Node::Required` is always seen through.
//! `Node::MutEx` is seen through to the member responding to the key.
use crate::api::*;
use crate::parser::ParserError;
use crate::prelude::NodeState;

/// The option-like node an option key resolved to.
#[derive(Debug)]
pub(crate) enum Leaf<'n> {
    Flag(&'n mut Flag),
    Counter(&'n mut Counter),
    Valued(&'n mut Valued),
}

/// An option key resolved to its leaf, along with the group slot to record once the leaf is applied.
#[derive(Debug)]
pub(crate) struct Selection<'n> {
    pub(crate) leaf: Leaf<'n>,
    pub(crate) group: Option<GroupSlot<'n>>,
}

impl<'n> From<Leaf<'n>> for Selection<'n> {
    fn from(leaf: Leaf<'n>) -> Self {
        Self { leaf, group: None }
    }
}

/// The selection state of a mutually exclusive group, and the member resolved within it.
#[derive(Debug)]
pub(crate) struct GroupSlot<'n> {
    selected: &'n mut Option<usize>,
    index: usize,
}

impl<'n> GroupSlot<'n> {
    pub(crate) fn record(self) {
        self.selected.replace(self.index);
    }
}

/// The first node or group member keyed by a lookup key.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Found<'n> {
    Node(&'n Node),
    Member(&'n Member),
}

impl<'n> Found<'n> {
    pub(crate) fn state<S: NodeState>(self) -> Option<&'n S> {
        match self {
            Found::Node(node) => S::from_node(node),
            Found::Member(member) => S::from_member(member),
        }
    }
}

/// Resolve `key` as an option (`--key` or `-k`) against `node`.
///
/// Only flags, counters and valued options respond to option keys.
/// Resolving into a mutually exclusive group fails if a different member was already selected.
/// The member itself is only selected once its `GroupSlot` is recorded.
pub(crate) fn select_option<'n>(
    node: &'n mut Node,
    key: &str,
) -> Result<Option<Selection<'n>>, ParserError> {
    match node {
        Node::Flag(flag) if flag.keyed_by(key) => Ok(Some(Leaf::Flag(flag).into())),
        Node::Counter(counter) if counter.keyed_by(key) => Ok(Some(Leaf::Counter(counter).into())),
        Node::Valued(valued) if valued.keyed_by(key) => Ok(Some(Leaf::Valued(valued).into())),
        Node::MutEx(group) => select_member(group, key),
        Node::Required(inner) => select_option(inner, key),
        _ => Ok(None),
    }
}

fn select_member<'n>(
    group: &'n mut MutEx,
    key: &str,
) -> Result<Option<Selection<'n>>, ParserError> {
    let MutEx { members, selected } = group;
    let index = match members.iter().position(|member| member.keyed_by(key)) {
        Some(index) => index,
        None => return Ok(None),
    };

    if let Some(previous) = *selected {
        if previous != index {
            return Err(ParserError::MutexViolation {
                key: key.to_string(),
                conflict: members[previous].ids()[0].to_string(),
            });
        }
    }

    let leaf = match &mut members[index] {
        Member::Flag(flag) => Leaf::Flag(flag),
        Member::Counter(counter) => Leaf::Counter(counter),
        Member::Valued(valued) => Leaf::Valued(valued),
    };

    Ok(Some(Selection {
        leaf,
        group: Some(GroupSlot { selected, index }),
    }))
}

/// Resolve `name` as a sub-command against `node`.
pub(crate) fn select_command<'n>(node: &'n mut Node, name: &str) -> Option<&'n mut Command> {
    match node {
        Node::Command(command) if command.keyed_by(name) => Some(command),
        Node::Required(inner) => select_command(inner, name),
        _ => None,
    }
}

/// View `node` as a positional slot, regardless of its name.
pub(crate) fn select_positional(node: &mut Node) -> Option<&mut Positional> {
    match node {
        Node::Positional(positional) => Some(positional),
        Node::Required(inner) => select_positional(inner),
        _ => None,
    }
}

/// Find whatever in `node` is keyed by `key`, for lookup.
pub(crate) fn find<'n>(node: &'n Node, key: &str) -> Option<Found<'n>> {
    match node {
        Node::MutEx(group) => group
            .members
            .iter()
            .find(|member| member.keyed_by(key))
            .map(Found::Member),
        Node::Required(inner) => find(inner, key),
        _ if node.keyed_by(key) => Some(Found::Node(node)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use rstest::rstest;

    fn group() -> Node {
        MutEx::new([
            Member::from(Flag::new('x').alias("exe")),
            Member::from(Counter::new('l')),
            Member::from(Valued::new('m')),
        ])
        .into()
    }

    #[rstest]
    #[case(Flag::new('g').into(), "g")]
    #[case(Node::from(Flag::new('g').alias("git")).required(), "git")]
    #[case(group(), "exe")]
    fn select_option_flag(#[case] node: Node, #[case] key: &str) {
        let mut node = node;
        assert_matches!(
            select_option(&mut node, key),
            Ok(Some(Selection {
                leaf: Leaf::Flag(_),
                ..
            }))
        );
    }

    #[rstest]
    #[case(Positional::new("name").into(), "name")]
    #[case(Command::new("new", Parser::default()).into(), "new")]
    #[case(Flag::new('g').into(), "x")]
    #[case(group(), "g")]
    fn select_option_none(#[case] node: Node, #[case] key: &str) {
        let mut node = node;
        assert_matches!(select_option(&mut node, key), Ok(None));
    }

    #[test]
    fn select_member_unrecorded() {
        // Setup
        let mut node = group();

        // Execute
        let selection = select_option(&mut node, "exe").unwrap().unwrap();
        assert_matches!(selection.leaf, Leaf::Flag(_));
        assert!(selection.group.is_some());
        drop(selection);

        // Verify
        assert_matches!(node, Node::MutEx(group) => {
            assert_eq!(group.selected(), None);
        });
    }

    #[test]
    fn select_member_repeat() {
        // Setup
        let mut node = group();

        // Execute
        for _ in 0..2 {
            let Selection { leaf, group } = select_option(&mut node, "l").unwrap().unwrap();
            assert_matches!(leaf, Leaf::Counter(_));
            group.unwrap().record();
        }

        // Verify
        assert_matches!(node, Node::MutEx(group) => {
            assert_matches!(group.selected(), Some(Member::Counter(_)));
        });
    }

    #[test]
    fn select_member_conflict() {
        // Setup
        let mut node = group();
        let Selection { group, .. } = select_option(&mut node, "exe").unwrap().unwrap();
        group.unwrap().record();

        // Execute
        let result = select_option(&mut node, "m");

        // Verify
        assert_eq!(
            result.unwrap_err(),
            ParserError::MutexViolation {
                key: "m".to_string(),
                conflict: "x".to_string(),
            }
        );
    }

    #[test]
    fn select_member_conflict_after_unrecorded() {
        // Setup
        let mut node = group();
        drop(select_option(&mut node, "exe").unwrap());

        // Execute
        let result = select_option(&mut node, "m");

        // Verify
        assert_matches!(
            result,
            Ok(Some(Selection {
                leaf: Leaf::Valued(_),
                group: Some(_),
            }))
        );
    }

    #[rstest]
    #[case(Command::new("new", Parser::default()).into(), "new", true)]
    #[case(Node::from(Command::new("new", Parser::default())).required(), "new", true)]
    #[case(Command::new("new", Parser::default()).into(), "old", false)]
    #[case(Positional::new("new").into(), "new", false)]
    fn select_command_cases(#[case] node: Node, #[case] name: &str, #[case] expected: bool) {
        let mut node = node;
        assert_eq!(select_command(&mut node, name).is_some(), expected);
    }

    #[rstest]
    #[case(Positional::new("name").into(), true)]
    #[case(Node::from(Positional::new("name")).required(), true)]
    #[case(Flag::new('n').into(), false)]
    fn select_positional_cases(#[case] node: Node, #[case] expected: bool) {
        let mut node = node;
        assert_eq!(select_positional(&mut node).is_some(), expected);
    }

    #[test]
    fn find_member() {
        // Setup
        let node = group();

        // Execute & verify
        assert_matches!(find(&node, "m"), Some(Found::Member(Member::Valued(_))));
        assert!(find(&node, "q").is_none());
        assert!(find(&node, "m").unwrap().state::<Valued>().is_some());
        assert!(find(&node, "m").unwrap().state::<Flag>().is_none());
    }

    #[test]
    fn find_required() {
        let node = Node::from(Positional::new("name")).required();
        assert_matches!(find(&node, "name"), Some(Found::Node(Node::Positional(_))));
    }
}
