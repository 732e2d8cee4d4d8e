use proc_macro2::TokenStream;
use quote::{format_ident, quote, quote_spanned, ToTokens, TokenStreamExt as _};
use syn::{
    ext::IdentExt as _,
    parse::{Error, ParseStream, Result},
    spanned::Spanned as _,
    Attribute, FnArg, Ident, ItemFn, Path, Token,
};

macro_rules! try_quote {
    ($e:expr) => {
        match $e {
            Ok(parsed) => parsed,
            Err(err) => return err.to_compile_error(),
        }
    };
}

pub(crate) fn test(args: TokenStream, item: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return Error::new_spanned(&args, "no arguments are accepted").to_compile_error();
    }

    let mut item = try_quote!(syn::parse2::<ItemFn>(item));
    try_quote!(validate_signature(&item));

    // extract arbor-specific attributes.
    let params = try_quote!(Params::from_attrs(&mut item.attrs));

    // append bounds to where clause.
    if let syn::ReturnType::Type(_, ref ty) = item.sig.output {
        let where_clause = item.sig.generics.make_where_clause();
        where_clause
            .predicates
            .push(syn::parse_quote!(#ty: __arbor::Termination));
    }

    Generated {
        item: &item,
        params: &params,
    }
    .to_token_stream()
}

fn validate_signature(item: &ItemFn) -> Result<()> {
    let sig = &item.sig;

    if !sig.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &sig.generics,
            "test functions cannot take generic parameters",
        ));
    }

    if let Some(asyncness) = sig.asyncness {
        return Err(Error::new_spanned(
            asyncness,
            "async test functions are not supported",
        ));
    }

    match sig.inputs.first() {
        Some(FnArg::Typed(..)) if sig.inputs.len() == 1 => Ok(()),
        Some(FnArg::Receiver(receiver)) => Err(Error::new_spanned(
            receiver,
            "test functions cannot take a receiver",
        )),
        _ => Err(Error::new(
            sig.paren_token.span,
            "test functions must take exactly one argument of type `&arbor::Suite`",
        )),
    }
}

struct Params {
    crate_path: Path,
}

impl Params {
    fn from_attrs(attrs: &mut Vec<Attribute>) -> Result<Self> {
        let mut crate_path = None;

        let mut parse_attr = |input: ParseStream<'_>| -> Result<()> {
            match input.call(Ident::parse_any)? {
                id if id == "crate" => {
                    let _: Token![=] = input.parse()?;
                    let path = input.call(Path::parse_mod_style)?;
                    crate_path.replace(path);
                    Ok(())
                }
                id => Err(Error::new_spanned(id, "unknown parameter name")),
            }
        };

        let mut errors = Errors::default();
        attrs.retain(|attr| {
            if !attr.path.is_ident("arbor") {
                return true;
            }
            errors.append_if_error(attr.parse_args_with(&mut parse_attr));
            false
        });
        errors.into_result()?;

        Ok(Self {
            crate_path: crate_path.unwrap_or_else(|| syn::parse_quote!(::arbor)),
        })
    }
}

#[derive(Default)]
struct Errors(Option<Error>);

impl Errors {
    fn append_if_error(&mut self, res: Result<()>) {
        match (self.0.as_mut(), res) {
            (Some(errors), Err(error)) => errors.combine(error),
            (None, Err(error)) => self.0 = Some(error),
            (_, Ok(())) => (),
        }
    }

    fn into_result(self) -> Result<()> {
        match self.0 {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

struct Generated<'a> {
    params: &'a Params,
    item: &'a ItemFn,
}

impl ToTokens for Generated<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let crate_path = &self.params.crate_path;
        let item = &*self.item;
        let ident = &self.item.sig.ident;
        let location = quote_spanned!(self.item.sig.span() => __arbor::location!());
        let test_case_id = format_ident!("__TEST_CASE_{}", ident);

        tokens.append_all(Some(quote! {
            #[allow(non_upper_case_globals)]
            const #ident: & #crate_path::_test_reexports::TestCase = {
                #[allow(unused_imports)]
                use #crate_path::_test_reexports as __arbor;

                #item

                &__arbor::TestCase {
                    desc: __arbor::TestDesc {
                        name: __arbor::test_name!(#ident),
                        location: #location,
                    },
                    test_fn: __arbor::test_fn!(#ident),
                }
            };
        }));

        tokens.append_all(Some(quote! {
            #crate_path::__test_case! {
                #[allow(non_upper_case_globals)]
                static #test_case_id: & #crate_path::_test_reexports::TestCase = #ident;
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use syn::{parse::Parser as _, Item};

    fn parse_items(input: ParseStream) -> Result<Vec<Item>> {
        let mut items = vec![];
        while !input.is_empty() {
            items.push(input.parse()?);
        }
        Ok(items)
    }

    fn read_file<P: AsRef<Path>>(path: P) -> TokenStream {
        let content = std::fs::read_to_string(path).unwrap();
        let items = parse_items.parse_str(&content).unwrap();
        quote!(#(#items)*)
    }

    fn test_expanded(name: &str) {
        let args = TokenStream::new();
        let item = read_file(format!("tests/test/{}.in.rs", name));
        let expected = read_file(format!("tests/test/{}.out.rs", name));
        let output = test(args, item);
        assert_eq!(expected.to_string(), output.to_string());
    }

    fn expand_error(args: TokenStream, item: TokenStream) -> String {
        test(args, item).to_string()
    }

    #[test]
    fn test_sync() {
        test_expanded("01-sync");
    }

    #[test]
    fn test_nested() {
        test_expanded("02-nested");
    }

    #[test]
    fn attributes() {
        test_expanded("03-attributes");
    }

    #[test]
    fn return_result() {
        test_expanded("04-return-result");
    }

    #[test]
    fn reject_async() {
        let output = expand_error(
            TokenStream::new(),
            quote!(
                async fn async_test(suite: &Suite) {}
            ),
        );
        assert!(output.contains("async test functions are not supported"));
    }

    #[test]
    fn reject_generics() {
        let output = expand_error(
            TokenStream::new(),
            quote!(
                fn generic_test<T>(suite: &Suite) {}
            ),
        );
        assert!(output.contains("cannot take generic parameters"));
    }

    #[test]
    fn reject_wrong_arity() {
        let output = expand_error(TokenStream::new(), quote!(fn no_args() {}));
        assert!(output.contains("exactly one argument"));

        let output = expand_error(
            TokenStream::new(),
            quote!(
                fn two_args(suite: &Suite, n: usize) {}
            ),
        );
        assert!(output.contains("exactly one argument"));
    }

    #[test]
    fn reject_arguments() {
        let output = expand_error(quote!(foo), quote!(fn with_args(suite: &Suite) {}));
        assert!(output.contains("no arguments are accepted"));
    }

    #[test]
    fn reject_unknown_parameter() {
        let output = expand_error(
            TokenStream::new(),
            quote!(
                #[arbor(krate = ::arbor)]
                fn unknown(suite: &Suite) {}
            ),
        );
        assert!(output.contains("unknown parameter name"));
    }
}
