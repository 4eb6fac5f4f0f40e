//! Editing commands: insert an embed, replace the source of one.

use crate::document::{Block, Document};
use nvembed_core::{
    Attrs, EmbedNode, EmbedSchema, FlavorConfig, Provider, Ratio, SizingMode, is_url,
    normalize_media_url,
};
use tracing::{debug, warn};

/// Optional overrides accompanying an insertion or replacement
/// request. Anything left `None` falls back to the flavor default.
#[derive(Debug, Clone, Default)]
pub struct InsertOptions {
    pub sizing: Option<SizingMode>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub ratio: Option<Ratio>,
    pub provider: Option<Provider>,
    /// Explicitly requested passthrough attributes. These win over
    /// both the configured defaults and the selection's attributes.
    pub attributes: Attrs,
}

/// Inserts a new embed block at the optimal position.
pub struct InsertEmbedCommand<'a> {
    config: &'a FlavorConfig,
}

impl<'a> InsertEmbedCommand<'a> {
    pub fn new(config: &'a FlavorConfig) -> Self {
        Self { config }
    }

    pub fn is_enabled(&self, document: &Document) -> bool {
        document.is_embed_allowed()
    }

    /// Insert an embed for `src`. Returns the index of the inserted
    /// block, or `None` when the request was refused (invalid source
    /// or schema disallows embeds here).
    pub fn execute(
        &self,
        document: &mut Document,
        src: &str,
        options: &InsertOptions,
    ) -> Option<usize> {
        if !is_url(src) {
            warn!(src, "refusing to insert embed: source is not a URL");
            return None;
        }
        if !self.is_enabled(document) {
            debug!("embed insertion disallowed by the document schema");
            return None;
        }
        let node = build_node(self.config, document, src, options);
        debug!(src = %node.src, "inserting embed");
        Some(document.insert_at_optimal_position(Block::Embed(node)))
    }
}

/// Swaps the source of the currently selected embed, keeping its
/// sizing and passthrough attributes.
pub struct ReplaceEmbedSourceCommand<'a> {
    config: &'a FlavorConfig,
}

impl<'a> ReplaceEmbedSourceCommand<'a> {
    pub fn new(config: &'a FlavorConfig) -> Self {
        Self { config }
    }

    pub fn is_enabled(&self, document: &Document) -> bool {
        document
            .selected_block()
            .is_some_and(|block| block.as_embed().is_some())
    }

    /// Point the selected embed at `src`. No-op unless an embed is
    /// selected and the source passes validation.
    pub fn execute(&self, document: &mut Document, src: &str, provider: Option<Provider>) -> bool {
        if !is_url(src) {
            warn!(src, "refusing to replace embed source: not a URL");
            return false;
        }
        let has_provider = self.config.has_provider();
        let Some(embed) = document
            .selected_block_mut()
            .and_then(|block| block.as_embed_mut())
        else {
            return false;
        };
        embed.src = resolve_src(src, has_provider);
        if has_provider {
            embed.provider = provider.or(embed.provider).or(Some(Provider::Google));
        }
        true
    }
}

fn resolve_src(src: &str, has_provider: bool) -> String {
    if has_provider {
        // Viewer rewriting happens on downcast; the model keeps the
        // document's own URL.
        src.to_string()
    } else {
        normalize_media_url(src)
    }
}

fn build_node(
    config: &FlavorConfig,
    document: &Document,
    src: &str,
    options: &InsertOptions,
) -> EmbedNode {
    let schema = EmbedSchema::for_flavor(config);

    // Selection attributes first, configured defaults over them,
    // explicit request on top.
    let mut extra = document.selection.attributes.clone();
    extra.overlay(&config.default_attributes);
    extra.overlay(&options.attributes);
    extra.retain(|key| schema.passthrough_attributes().contains(&key));

    let mut node = EmbedNode::new(resolve_src(src, config.has_provider()))
        .sizing(options.sizing.unwrap_or_default())
        .dimensions(
            options.width.unwrap_or(config.default_width),
            options.height.unwrap_or(config.default_height),
        )
        .ratio(options.ratio.unwrap_or(config.default_ratio));
    if config.has_provider() {
        node = node.provider(options.provider.unwrap_or(Provider::Google));
    }
    node.extra = extra;
    node
}
