use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, parse_macro_input, spanned::Spanned};

/// Derives `powerups::ItemCatalog` for a fieldless enum.
///
/// Variant attribute: `#[item(none)]` marks the sentinel (exactly one),
/// `#[item(name = "...")]` overrides the kebab-cased lookup name.
#[proc_macro_derive(ItemCatalog, attributes(item))]
pub fn derive_item_catalog(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct Variant {
    ident: Ident,
    sentinel: bool,
    name: String,
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "ItemCatalog can only be derived for enums",
        ));
    };

    let mut variants = Vec::new();
    for variant in &data_enum.variants {
        // A catalog is C-like; weight rows address kinds by position.
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "ItemCatalog only supports fieldless variants",
            ));
        }

        let mut sentinel = false;
        let mut name: Option<LitStr> = None;
        for attr in variant.attrs.iter().filter(|a| a.path().is_ident("item")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("none") {
                    sentinel = true;
                    Ok(())
                } else if meta.path.is_ident("name") {
                    name = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("use #[item(none)] or #[item(name = \"...\")]"))
                }
            })?;
        }

        if sentinel && name.is_some() {
            return Err(syn::Error::new(
                variant.span(),
                "the #[item(none)] sentinel cannot carry a name",
            ));
        }

        let name = match name {
            Some(lit) => lit.value(),
            None if sentinel => String::new(),
            None => kebab_case(&variant.ident.to_string()),
        };
        variants.push(Variant {
            ident: variant.ident.clone(),
            sentinel,
            name,
        });
    }

    let mut sentinels = variants.iter().filter(|v| v.sentinel);
    let Some(none) = sentinels.next() else {
        return Err(syn::Error::new(
            enum_ident.span(),
            "missing #[item(none)] on the sentinel variant",
        ));
    };
    if let Some(extra) = sentinels.next() {
        return Err(syn::Error::new(
            extra.ident.span(),
            "only one variant may be marked #[item(none)]",
        ));
    }

    let none_ident = &none.ident;
    let kinds: Vec<_> = variants.iter().filter(|v| !v.sentinel).collect();
    let kind_idents = kinds.iter().map(|v| &v.ident);
    let name_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        let name = &v.name;
        quote! { Self::#ident => #name }
    });

    Ok(quote! {
        impl powerups::ItemCatalog for #enum_ident {
            const NONE: Self = Self::#none_ident;
            const KINDS: &'static [Self] = &[
                #(Self::#kind_idents),*
            ];

            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    })
}

/// `RubberBall` -> `rubber-ball`
fn kebab_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
        } else if ch == '_' {
            out.push('-');
        } else {
            out.push(ch);
        }
    }
    out
}
