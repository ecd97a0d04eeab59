use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Declare a color model made of bounded integer channels.
///
/// Every field needs a `#[max(N)]` attribute, the lower bound of a channel is
/// always 0. Along with the struct itself this generates a `<Name>Channel`
/// enum naming the channels, a clamping `new` and an implementation of
/// `crate::models::Model`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) || !(3..=4).contains(&input.fields.len()) {
        return quote! {
            compile_error!("Models must have 3 or 4 named fields, one for each channel of the color.")
        }
        .into();
    }

    let mut names = vec![];
    let mut types = vec![];
    let mut maxes = vec![];

    for field in input.fields.iter_mut() {
        // Make sure the channels are public.
        field.vis = syn::Visibility::Public(Default::default());

        let Some(position) = field.attrs.iter().position(|a| a.path().is_ident("max")) else {
            return syn::Error::new_spanned(&field.ident, "channel is missing a #[max(N)] attribute")
                .to_compile_error()
                .into();
        };
        let attr = field.attrs.remove(position);
        let max = match attr.parse_args::<syn::LitInt>() {
            Ok(max) => max,
            Err(err) => return err.to_compile_error().into(),
        };

        names.push(field.ident.clone().expect("named fields"));
        types.push(field.ty.clone());
        maxes.push(max);
    }

    let attrs = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        })
        .unwrap();
    input.attrs.extend(attrs);

    let struct_name = input.ident.clone();
    let channel_name = syn::Ident::new(&format!("{}Channel", struct_name), Span::call_site());
    let channel_doc = format!("Names a single channel of a [`{}`] color.", struct_name);

    let variants = names
        .iter()
        .map(|n| syn::Ident::new(&n.to_string().to_case(Case::Pascal), Span::call_site()))
        .collect::<Vec<_>>();
    let labels = names.iter().map(|n| n.to_string()).collect::<Vec<_>>();
    let count = names.len();

    quote! {
        #input

        #[doc = #channel_doc]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum #channel_name {
            #(
                #[doc = concat!("The `", #labels, "` channel.")]
                #variants,
            )*
        }

        impl #channel_name {
            /// Every channel, in declaration order.
            pub const ALL: [Self; #count] = [#(Self::#variants),*];

            /// The largest value the channel can hold.
            pub fn max(self) -> i64 {
                match self {
                    #(Self::#variants => #maxes,)*
                }
            }

            /// The field name of the channel.
            pub fn name(self) -> &'static str {
                match self {
                    #(Self::#variants => #labels,)*
                }
            }
        }

        impl #struct_name {
            /// Create a new color, clamping every channel to its maximum.
            pub fn new(#(#names: #types),*) -> Self {
                Self {
                    #(#names: ::core::cmp::Ord::min(#names, #maxes),)*
                }
            }
        }

        impl crate::models::Model for #struct_name {
            type Channel = #channel_name;

            const SPACE: crate::models::Space = crate::models::Space::#struct_name;

            fn channel(&self, channel: Self::Channel) -> i64 {
                match channel {
                    #(#channel_name::#variants => self.#names as i64,)*
                }
            }

            fn with_channel(&self, channel: Self::Channel, value: i64) -> Self {
                let mut model = *self;
                match channel {
                    #(#channel_name::#variants => model.#names = value.clamp(0, #maxes) as #types,)*
                }
                model
            }
        }
    }
    .into()
}
