use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, LitBool, Token};

/// One slot of a condition row: a bound boolean or a guard predicate
enum Slot {
    Bound(bool),
    Guard(syn::LitStr),
}

/// AST for one condition row: a tuple of slots plus an optional `=> output`
struct RowAst {
    slots: Vec<Slot>,
    output: Option<bool>,
}

impl RowAst {
    /// Generate the `Row` constructor call for this row
    ///
    /// The macro emits unqualified `Row`/`Slot` paths and lets the call site
    /// bring them into scope, matching how the runtime constructors are used
    /// by hand-written code.
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        let guarded = self.slots.iter().any(|s| matches!(s, Slot::Guard(_)));

        if guarded {
            let slots = self.slots.iter().map(|slot| match slot {
                Slot::Bound(value) => quote! { Slot::Bound(#value) },
                Slot::Guard(lit) => quote! { Slot::guard(#lit) },
            });
            let output = self.output.unwrap_or(true);
            quote! {
                Row::guarded(vec![#(#slots),*], #output)
            }
        } else {
            let values = self.slots.iter().map(|slot| match slot {
                Slot::Bound(value) => quote! { #value },
                Slot::Guard(_) => unreachable!(),
            });
            match self.output {
                Some(output) => quote! {
                    Row::explicit(&[#(#values),*], #output)
                },
                None => quote! {
                    Row::implicit(&[#(#values),*])
                },
            }
        }
    }
}

impl Parse for RowAst {
    fn parse(input: ParseStream) -> Result<Self> {
        let content;
        syn::parenthesized!(content in input);

        let mut slots = Vec::new();
        while !content.is_empty() {
            slots.push(parse_slot(&content)?);
            if content.is_empty() {
                break;
            }
            content.parse::<Token![,]>()?;
        }

        if slots.is_empty() {
            return Err(input.error("condition rows must have at least one slot"));
        }

        let output = if input.peek(Token![=>]) {
            input.parse::<Token![=>]>()?;
            let lit: LitBool = input.parse()?;
            Some(lit.value)
        } else {
            None
        };

        Ok(RowAst { slots, output })
    }
}

/// Parse a single slot: `true`, `false`, or a guard predicate string literal
fn parse_slot(input: ParseStream) -> Result<Slot> {
    if input.peek(LitBool) {
        let lit: LitBool = input.parse()?;
        Ok(Slot::Bound(lit.value))
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        Ok(Slot::Guard(lit))
    } else {
        Err(input.error("expected `true`, `false`, or a guard predicate string"))
    }
}

/// Parser for the whole macro body: comma-separated rows
struct TableParser {
    rows: Punctuated<RowAst, Token![,]>,
}

impl Parse for TableParser {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(TableParser {
            rows: Punctuated::parse_terminated(input)?,
        })
    }
}

/// The `table!` procedural macro for declaring condition rows
///
/// Expands to a `Vec<Row>` literal. Call sites must have `Row` (and `Slot`,
/// when guard predicates are used) in scope.
///
/// # Supported Syntax
///
/// - `(true, false)` - implicit row, output assumed true
/// - `(true, false) => false` - explicit row with output marker
/// - `(true, "x > 0") => true` - mixed row; string literals become guard
///   predicates whose source text is carried through to the synthesized
///   expression
///
/// # Examples
///
/// ```ignore
/// use boolsynth::{table, Row, Slot};
///
/// // XOR declared with one explicit and one implicit row
/// let rows = table! {
///     (true, false) => true,
///     (false, true),
/// };
///
/// // Negative examples guard against contradictory specifications
/// let rows = table! {
///     (true, true),
///     (false, false) => false,
/// };
///
/// // Guard predicates stand in for inputs that are not plain booleans
/// let rows = table! {
///     (true, "sum(neighbors) == 2"),
///     (true, "sum(neighbors) == 3"),
/// };
/// ```
#[proc_macro]
pub fn table(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as TableParser);
    let rows = parser.rows.iter().map(RowAst::to_tokens);
    TokenStream::from(quote! {
        vec![#(#rows),*]
    })
}
