//! Procedural macros for the advent-solver library

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Lit};

/// Derive macro generating the `Solver` trait impl from `PartSolver` impls
///
/// The generated `solve_part` dispatches part numbers `1..=max_parts` to the
/// corresponding `PartSolver<N>` impl and reports any other part as not
/// implemented. The type must provide a `PartSolver<N>` impl for every part
/// in range; a missing impl is a compile-time error at the dispatch site.
///
/// # Attributes
///
/// - `max_parts`: Required. The number of parts the solver implements.
///
/// # Example
///
/// ```ignore
/// use advent_solver::{PartSolver, PuzzleParser};
/// use advent_solver_macros::AdventSolver;
///
/// #[derive(AdventSolver)]
/// #[advent_solver(max_parts = 2)]
/// struct Day1Solver;
///
/// // impl PuzzleParser for Day1Solver { ... }
/// // impl PartSolver<1> for Day1Solver { ... }
/// // impl PartSolver<2> for Day1Solver { ... }
/// ```
#[proc_macro_derive(AdventSolver, attributes(advent_solver))]
pub fn derive_advent_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // Extract the struct name
    let name = &input.ident;

    // Find the #[advent_solver(...)] attribute
    let solver_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("advent_solver"))
        .expect("AdventSolver derive macro requires #[advent_solver(...)] attribute");

    let mut max_parts: Option<u8> = None;

    solver_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("max_parts") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    max_parts = Some(lit_int.base10_parse()?);
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[advent_solver(...)] attribute");

    let max_parts = max_parts.expect("Missing required 'max_parts' attribute");

    // One match arm per part, each dispatching to the PartSolver impl
    let arms = (1..=max_parts).map(|part| {
        let part_lit = Literal::u8_unsuffixed(part);
        quote! {
            #part_lit => <#name as ::advent_solver::PartSolver<#part_lit>>::solve(shared),
        }
    });

    let expanded = quote! {
        impl ::advent_solver::Solver for #name {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut Self::SharedData<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, ::advent_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => Err(::advent_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// This macro generates the necessary code to register a solver with the
/// inventory system, allowing it to be discovered and registered
/// automatically.
///
/// # Attributes
///
/// - `year`: Required. The puzzle year (e.g., 2025)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If the trait is not
/// implemented, you will get a clear compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
///   |
///   | struct YourSolver;
///   |        ^^^^^^^^^^ unsatisfied trait bound
/// ```
///
/// # Example
///
/// ```ignore
/// use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
///
/// #[derive(AdventSolver, AutoRegisterSolver)]
/// #[advent_solver(max_parts = 2)]
/// #[advent(year = 2025, day = 1, tags = ["easy"])]
/// struct Day1Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(advent))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // Extract the struct name
    let name = &input.ident;

    // Find the #[advent(...)] attribute
    let advent_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("advent"))
        .expect("AutoRegisterSolver derive macro requires #[advent(...)] attribute");

    // Parse the attribute arguments at their field widths so the generated
    // struct literal typechecks against SolverPlugin
    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    advent_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("year") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    year = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("day") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    day = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("tags") {
                // Parse array of string literals: tags = ["a", "b"]
                let _ = meta.value()?;
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        tags.push(lit_str.value());
                    }
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[advent(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    // Generate the tags array
    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    // Generate the code with a compile-time trait bound check
    let expanded = quote! {
        // Compile-time check that the type implements the Solver trait,
        // producing a readable error message if it doesn't
        const _: () = {
            trait MustImplementSolver: ::advent_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
