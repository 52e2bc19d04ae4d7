use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate the boilerplate for a color model made of exactly three `f64`
/// components: public fields, value derives, a `new` constructor and
/// conversions to and from `crate::color::Components`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    // Models are plain values, only add the derives if the caller didn't
    // bring their own.
    let has_derive = input.attrs.iter().any(|a| a.path().is_ident("derive"));
    if !has_derive {
        match syn::Attribute::parse_outer.parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        }) {
            Ok(attrs) => input.attrs.extend(attrs),
            Err(err) => return err.to_compile_error().into(),
        }
    }

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color from its three components.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<#struct_name> for crate::color::Components {
            fn from(value: #struct_name) -> Self {
                value.to_components()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
