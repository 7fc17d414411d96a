use crate::ast;
use crate::constraints::ConstraintCheck;
use crate::constraints::ConstraintError;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValueDef;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeAnnotation;
use crate::validation::argument_values;
use crate::validation::argument_values::VariableValues;
use crate::Value;
use crate::Variables;
use indexmap::IndexMap;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, ConstraintError>;

/// Stands in for arguments and input fields that have no value at all.
static NULL: Value = Value::Null;

/// Walks every argument value reachable from an operation and runs each
/// registered [`ConstraintCheck`] against it.
///
/// An [`ArgumentWalker`] holds no per-request state, so a single instance can
/// validate any number of requests concurrently.
///
/// ```ignore
/// let walker = ArgumentWalker::new(&schema, default_checks());
/// walker.validate(&document, Some("Search"), &variables)?;
/// ```
#[derive(Debug)]
pub struct ArgumentWalker<'schema> {
    checks: Vec<Box<dyn ConstraintCheck>>,
    schema: &'schema Schema,
}
impl<'schema> ArgumentWalker<'schema> {
    pub fn new(
        schema: &'schema Schema,
        checks: Vec<Box<dyn ConstraintCheck>>,
    ) -> Self {
        Self {
            checks,
            schema,
        }
    }

    /// The registered checks, in the order they run.
    pub fn checks(&self) -> &[Box<dyn ConstraintCheck>] {
        self.checks.as_slice()
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    /// Validates the arguments of one operation in `document`, or of every
    /// operation when no `operation_name` is given.
    ///
    /// Naming an operation the document does not contain is not an error
    /// here: nothing is walked, leaving the executor to report it.
    #[tracing::instrument(level = "debug", skip(self, document, variables))]
    pub fn validate(
        &self,
        document: &ast::query::Document,
        operation_name: Option<&str>,
        variables: &Variables,
    ) -> Result<()> {
        let fragments: HashMap<&str, &ast::query::FragmentDefinition> =
            document.definitions.iter()
                .filter_map(|def| match def {
                    ast::query::Definition::Fragment(frag_def) =>
                        Some((frag_def.name.as_str(), frag_def)),
                    ast::query::Definition::Operation(_) =>
                        None,
                })
                .collect();

        let mut matched_operation = false;
        for def in document.definitions.iter() {
            let ast::query::Definition::Operation(op_def) = def else {
                continue
            };
            let operation = OperationParts::from_ast(op_def);

            if operation_name.is_some() && operation.name != operation_name {
                continue;
            }
            matched_operation = true;

            let root_type = match operation.kind {
                OperationKind::Query => self.schema.query_type(),
                OperationKind::Mutation => self.schema.mutation_type(),
                OperationKind::Subscription => self.schema.subscription_type(),
            };
            let Some(root_type) = root_type else {
                tracing::debug!(
                    "Skipping {:?} operation `{}`: the schema defines no root \
                    type for it.",
                    operation.kind,
                    operation.name.unwrap_or("<anonymous>"),
                );
                continue
            };

            let mut traversal = Traversal {
                arguments_stack: vec![],
                fragment_path: vec![],
                fragments: &fragments,
                variables: VariableValues::new(operation.variable_defs, variables),
                walker: self,
            };
            traversal.visit_selection_set(root_type, operation.selection_set)?;
        }

        if !matched_operation {
            tracing::debug!(
                "No operation named `{}` in the document; nothing to validate.",
                operation_name.unwrap_or_default(),
            );
        }

        Ok(())
    }

    /// Runs every check against one argument or input-field value, then
    /// descends into the value's input objects.
    fn traverse_field(
        &self,
        field: &dyn InputValueDef,
        value: &Value,
    ) -> Result<()> {
        for check in self.checks.iter() {
            check.check(field, value)?;
        }

        if value.is_null() {
            return Ok(());
        }

        match (field.type_annotation(), value) {
            (TypeAnnotation::Named(named_annot), Value::Object(entries)) => {
                if let Some(GraphQLType::InputObject(inputobj_type)) =
                    named_annot.graphql_type(self.schema) {
                    self.traverse_input_object(inputobj_type, entries)?;
                }
            },

            (TypeAnnotation::List(_), Value::List(_)) => {
                let (base_annot, values) =
                    flatten_list_value(field.type_annotation(), value);
                if let Some(GraphQLType::InputObject(inputobj_type)) =
                    base_annot.graphql_type(self.schema) {
                    for value in values {
                        if let Value::Object(entries) = value {
                            self.traverse_input_object(inputobj_type, entries)?;
                        }
                    }
                }
            },

            // Shapes that disagree with the declared type are left for the
            // executor to reject.
            _ => (),
        }

        Ok(())
    }

    fn traverse_input_object(
        &self,
        inputobj_type: &InputObjectType,
        entries: &IndexMap<String, Value>,
    ) -> Result<()> {
        for (field_name, input_field) in inputobj_type.fields() {
            let field_value = entries.get(field_name.as_str()).unwrap_or(&NULL);
            self.traverse_field(input_field, field_value)?;
        }
        Ok(())
    }
}

/// Peels every list layer off of `type_annot`, flattening `value` by one
/// level per layer peeled.
///
/// Nulls are discarded at every level, so `[[1, 2], null, [3]]` bound to
/// `[[Int]]` yields `Int` and `[1, 2, 3]`. Items that are not lists where a
/// list is expected are kept as-is.
pub(crate) fn flatten_list_value<'a, 'v>(
    mut type_annot: &'a TypeAnnotation,
    value: &'v Value,
) -> (&'a NamedTypeAnnotation, Vec<&'v Value>) {
    let mut values = vec![value];
    loop {
        match type_annot {
            TypeAnnotation::List(list_annot) => {
                values = values.into_iter()
                    .filter(|value| !value.is_null())
                    .flat_map(|value| match value {
                        Value::List(items) => items.iter().collect::<Vec<_>>(),
                        other => vec![other],
                    })
                    .collect();
                type_annot = list_annot.inner_type_annotation();
            },

            TypeAnnotation::Named(named_annot) => {
                values.retain(|value| !value.is_null());
                return (named_annot, values);
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

/// The parts of an [`ast::query::OperationDefinition`] the walker needs,
/// independent of the kind of operation.
struct OperationParts<'doc> {
    kind: OperationKind,
    name: Option<&'doc str>,
    selection_set: &'doc ast::query::SelectionSet,
    variable_defs: &'doc [ast::query::VariableDefinition],
}
impl<'doc> OperationParts<'doc> {
    fn from_ast(op_def: &'doc ast::query::OperationDefinition) -> Self {
        use ast::query::OperationDefinition;
        match op_def {
            OperationDefinition::SelectionSet(selection_set) => Self {
                kind: OperationKind::Query,
                name: None,
                selection_set,
                variable_defs: &[],
            },

            OperationDefinition::Query(query) => Self {
                kind: OperationKind::Query,
                name: query.name.as_deref(),
                selection_set: &query.selection_set,
                variable_defs: query.variable_definitions.as_slice(),
            },

            OperationDefinition::Mutation(mutation) => Self {
                kind: OperationKind::Mutation,
                name: mutation.name.as_deref(),
                selection_set: &mutation.selection_set,
                variable_defs: mutation.variable_definitions.as_slice(),
            },

            OperationDefinition::Subscription(subscription) => Self {
                kind: OperationKind::Subscription,
                name: subscription.name.as_deref(),
                selection_set: &subscription.selection_set,
                variable_defs: subscription.variable_definitions.as_slice(),
            },
        }
    }
}

/// State for a single walk over one operation.
struct Traversal<'a> {
    /// Resolved argument values of each field selection currently being
    /// visited, innermost last.
    arguments_stack: Vec<IndexMap<String, Value>>,

    /// Fragments being expanded on the current path. A spread of any of
    /// these is not followed again.
    fragment_path: Vec<&'a str>,

    fragments: &'a HashMap<&'a str, &'a ast::query::FragmentDefinition>,
    variables: VariableValues,
    walker: &'a ArgumentWalker<'a>,
}
impl<'a> Traversal<'a> {
    fn type_condition(
        &self,
        type_condition: &ast::query::TypeCondition,
    ) -> Option<&'a GraphQLType> {
        let ast::query::TypeCondition::On(type_name) = type_condition;
        self.walker.schema.lookup_type(type_name.as_str())
    }

    fn visit_field(
        &mut self,
        parent_type: &'a GraphQLType,
        ast_field: &'a ast::query::Field,
    ) -> Result<()> {
        if ast_field.name.starts_with("__") {
            tracing::trace!("Skipping introspection field `{}`.", ast_field.name);
            return Ok(());
        }

        let Some(field_def) = parent_type.fields()
            .and_then(|fields| fields.get(ast_field.name.as_str())) else {
            tracing::debug!(
                "Skipping field `{}`: not defined on type `{}`.",
                ast_field.name,
                parent_type.name(),
            );
            return Ok(());
        };

        let argument_values = argument_values::resolve_argument_values(
            self.walker.schema,
            field_def,
            ast_field,
            &self.variables,
        );
        self.arguments_stack.push(argument_values);
        let result = self.visit_resolved_field(field_def, ast_field);
        self.arguments_stack.pop();
        result
    }

    fn visit_resolved_field(
        &mut self,
        field_def: &'a Field,
        ast_field: &'a ast::query::Field,
    ) -> Result<()> {
        let argument_values = self.arguments_stack.last();
        for (arg_name, _) in ast_field.arguments.iter() {
            let Some(param) = field_def.parameters().get(arg_name.as_str()) else {
                tracing::debug!(
                    "Skipping argument `{arg_name}`: not declared on field `{}`.",
                    field_def.name(),
                );
                continue
            };
            let value = argument_values
                .and_then(|values| values.get(arg_name.as_str()))
                .unwrap_or(&NULL);
            tracing::trace!("Checking `{}({arg_name}: {value})`.", field_def.name());
            self.walker.traverse_field(param, value)?;
        }

        if ast_field.selection_set.items.is_empty() {
            return Ok(());
        }

        let field_type = field_def.type_annotation()
            .innermost_named_type_annotation()
            .graphql_type(self.walker.schema);
        match field_type {
            Some(field_type) =>
                self.visit_selection_set(field_type, &ast_field.selection_set),
            None => {
                tracing::debug!(
                    "Skipping selections of `{}`: its type is not defined.",
                    field_def.name(),
                );
                Ok(())
            },
        }
    }

    fn visit_fragment_spread(
        &mut self,
        spread: &'a ast::query::FragmentSpread,
    ) -> Result<()> {
        let fragment_name = spread.fragment_name.as_str();
        let Some(frag_def) = self.fragments.get(fragment_name).copied() else {
            tracing::debug!("Skipping spread of undefined fragment `{fragment_name}`.");
            return Ok(());
        };

        if self.fragment_path.contains(&fragment_name) {
            tracing::debug!("Not re-entering fragment `{fragment_name}` (cycle).");
            return Ok(());
        }

        let Some(frag_type) = self.type_condition(&frag_def.type_condition) else {
            tracing::debug!(
                "Skipping fragment `{fragment_name}`: its type condition is not \
                defined.",
            );
            return Ok(());
        };

        self.fragment_path.push(fragment_name);
        let result = self.visit_selection_set(frag_type, &frag_def.selection_set);
        self.fragment_path.pop();
        result
    }

    fn visit_selection_set(
        &mut self,
        parent_type: &'a GraphQLType,
        selection_set: &'a ast::query::SelectionSet,
    ) -> Result<()> {
        use ast::query::Selection;
        for selection in selection_set.items.iter() {
            match selection {
                Selection::Field(ast_field) =>
                    self.visit_field(parent_type, ast_field)?,

                Selection::FragmentSpread(spread) =>
                    self.visit_fragment_spread(spread)?,

                Selection::InlineFragment(inline_frag) => {
                    let frag_type = match &inline_frag.type_condition {
                        Some(type_condition) => self.type_condition(type_condition),
                        None => Some(parent_type),
                    };
                    match frag_type {
                        Some(frag_type) =>
                            self.visit_selection_set(frag_type, &inline_frag.selection_set)?,
                        None => tracing::debug!(
                            "Skipping inline fragment: its type condition is not \
                            defined.",
                        ),
                    }
                },
            }
        }
        Ok(())
    }
}
