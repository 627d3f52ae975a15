//! Renders resolution output into Rust source.
//!
//! The renderer is a pure function of `Data`: it never consults the
//! catalogue and never makes a decision the resolution core did not
//! already make. Token assembly goes through `quote` so the emitted
//! code is syntactically valid by construction; the only failures are
//! names in `Data` that are not valid Rust paths.

use proc_macro2::TokenStream;
use quote::quote;
use thiserror::Error as ThisError;
use wiregen_core::data::{Arg, Data, FuncData};

///
/// RenderError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum RenderError {
    #[error("'{text}' is not a valid identifier")]
    InvalidIdent { text: String },

    #[error("'{text}' is not a valid path")]
    InvalidPath { text: String },

    #[error("'{text}' is not a valid type")]
    InvalidType { text: String },
}

/// Render the generated resolver source for one target aggregate.
pub fn generate(data: &Data) -> Result<String, RenderError> {
    let target = parse_ident(&data.target)?;

    let mut imports = Vec::new();
    for pkg in &data.imports {
        let path = parse_path(pkg)?;
        let alias = parse_ident(&sanitize(pkg))?;
        imports.push(quote! { use #path as #alias; });
    }

    let mut funcs = Vec::new();
    for group in data.privates.values() {
        for f in group {
            funcs.push(render_func(f, false)?);
        }
    }
    for group in data.publics.values() {
        for f in group {
            funcs.push(render_func(f, true)?);
        }
    }

    let tokens = quote! {
        #(#imports)*

        impl #target {
            #(#funcs)*
        }
    };

    Ok(format!(
        "// Generated by wiregen. Do not edit.\n\n{tokens}\n"
    ))
}

fn render_func(f: &FuncData, public: bool) -> Result<TokenStream, RenderError> {
    let name = parse_ident(&f.name)?;
    let ret: syn::Type = syn::parse_str(&f.ret).map_err(|_| RenderError::InvalidType {
        text: f.ret.clone(),
    })?;
    let call = parse_path(&f.call)?;

    let mut args = Vec::new();
    let mut docs = Vec::new();
    for arg in &f.args {
        match arg {
            Arg::Field { comment, ident } => {
                let ident = parse_ident(ident)?;
                args.push(quote! { self.#ident.clone() });
                docs.push(format!(" `{ident}` ({comment})"));
            }
            Arg::Call { comment, func } => {
                let func = parse_ident(func)?;
                args.push(quote! { self.#func() });
                docs.push(format!(" `{func}()` ({comment})"));
            }
        }
    }

    let vis = if public {
        quote! { pub }
    } else {
        TokenStream::new()
    };
    let doc_head = format!(" Wraps `{}`.", f.call);

    Ok(quote! {
        #[doc = #doc_head]
        #(#[doc = #docs])*
        #vis fn #name(&self) -> #ret {
            #call(#(#args),*)
        }
    })
}

fn parse_ident(text: &str) -> Result<syn::Ident, RenderError> {
    syn::parse_str(text).map_err(|_| RenderError::InvalidIdent {
        text: text.to_string(),
    })
}

fn parse_path(text: &str) -> Result<syn::Path, RenderError> {
    syn::parse_str(text).map_err(|_| RenderError::InvalidPath {
        text: text.to_string(),
    })
}

fn sanitize(pkg: &str) -> String {
    pkg.replace("::", "_")
        .replace(['.', '/', '-', ':'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> Data {
        let private = FuncData {
            imports: vec!["app::store".to_string(), "app::store".to_string()],
            pkg: "app::store".to_string(),
            name: "app_store_store".to_string(),
            ret: "app_store::Store".to_string(),
            call: "app_store::new_sql_store".to_string(),
            receiver: "&Container".to_string(),
            args: vec![Arg::Field {
                comment: "app::logging::Logger".to_string(),
                ident: "logger".to_string(),
            }],
        };
        let public = FuncData {
            imports: vec!["app::svc".to_string()],
            pkg: "app::svc".to_string(),
            name: "resolve_new_service".to_string(),
            ret: "app_svc::Service".to_string(),
            call: "app_svc::new_service".to_string(),
            receiver: "&Container".to_string(),
            args: vec![Arg::Call {
                comment: "app::store::Store".to_string(),
                func: "app_store_store".to_string(),
            }],
        };
        Data {
            package: "container".to_string(),
            target: "Container".to_string(),
            imports: vec!["app::store".to_string(), "app::svc".to_string()],
            publics: BTreeMap::from([("app::svc".to_string(), vec![public])]),
            privates: BTreeMap::from([("app::store".to_string(), vec![private])]),
        }
    }

    #[test]
    fn renders_imports_and_both_visibilities() {
        let src = generate(&sample()).unwrap();

        assert!(src.starts_with("// Generated by wiregen."));
        assert!(src.contains("use app :: store as app_store ;"));
        assert!(src.contains("fn app_store_store"));
        assert!(src.contains("pub fn resolve_new_service"));
        assert!(src.contains("self . logger . clone ()"));
        assert!(src.contains("self . app_store_store ()"));
    }

    #[test]
    fn rejects_invalid_names() {
        let mut data = sample();
        data.target = "not a type".to_string();
        assert!(matches!(
            generate(&data),
            Err(RenderError::InvalidIdent { .. })
        ));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(generate(&sample()).unwrap(), generate(&sample()).unwrap());
    }
}
