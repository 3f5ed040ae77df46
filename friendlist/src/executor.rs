use std::cell::RefCell;
use std::ops::DerefMut;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};

use crate::generator::Generator;
use crate::output::Output;
use crate::parser::{self, Parser};
use crate::query::{Client, ClientConfig, QueryKey, QueryState};
use crate::source::Source;
use crate::view::{ImageCheck, Panel};

type OutputPtr = Rc<RefCell<dyn Output>>;

/// Wires a [Source], a [Parser] and any number of [Generator]s with their [Output]s into one
/// render of the friends panel.
///
/// ```no_run
/// # use friendlist::{generator, output, parser, source, Executor};
/// Executor::new(source::File::new("db.json"), parser::Json::default())
///     .generator(generator::Html::default())
///     .output(output::StdOut::default())
///     .execute()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Executor<S: Source, P: Parser> {
    source: S,
    parser: P,
    key: QueryKey,
    client_config: ClientConfig,
    parser_config: Option<parser::Config>,
    image_check: Option<Box<dyn ImageCheck>>,
    pending: bool,
    generator_infos: Vec<GeneratorInfo>,
}

pub struct GeneratorInfo {
    generator: Box<dyn Generator>,
    outputs: Vec<OutputPtr>,
}

/// The state the rendered panel ended up in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Loading,
    Ready { friends: usize },
    Failed,
}

impl<S: Source + 'static, P: Parser> Executor<S, P> {
    pub fn new(source: S, parser: P) -> Self {
        Self {
            source,
            parser,
            key: QueryKey::FRIENDS,
            client_config: ClientConfig::default(),
            parser_config: None,
            image_check: None,
            pending: false,
            generator_infos: vec![],
        }
    }

    /// Query to fetch. Defaults to [QueryKey::FRIENDS].
    pub fn key(mut self, key: QueryKey) -> Self {
        self.key = key;
        self
    }

    pub fn client_config(mut self, config: ClientConfig) -> Self {
        self.client_config = config;
        self
    }

    pub fn parser_config(mut self, config: parser::Config) -> Self {
        self.parser_config = Some(config);
        self
    }

    /// Check avatar images before rendering and fall back to initials for those that fail.
    pub fn image_check(mut self, check: impl ImageCheck + 'static) -> Self {
        self.image_check = Some(Box::new(check));
        self
    }

    /// Render the loading state without fetching anything.
    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    pub fn generator(mut self, generator: impl Generator + 'static) -> Self {
        self.generator_infos.push(GeneratorInfo {
            generator: Box::new(generator),
            outputs: vec![],
        });
        self
    }

    /// Add an output for the last-added [Generator].
    ///
    /// This method takes complete ownership of the output. If you want access to the output after
    /// execution, use [Executor::output_ptr].
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.generator_infos
            .last_mut()
            .expect("no generators added")
            .outputs
            .push(Rc::new(RefCell::new(output)));
        self
    }

    /// Add an output for the last-added [Generator].
    ///
    /// The output is only borrowed mutably during [Executor::execute].
    pub fn output_ptr(mut self, output: OutputPtr) -> Self {
        self.generator_infos
            .last_mut()
            .expect("no generators added")
            .outputs
            .push(output);
        self
    }

    /// Number of outputs of the last-added [Generator].
    pub fn output_count(&self) -> usize {
        self.generator_infos
            .last()
            .map(|info| info.outputs.len())
            .unwrap_or(0)
    }

    pub fn execute(self) -> Result<Outcome> {
        if self.generator_infos.is_empty() {
            return Err(anyhow!("no 'generators' have been specified"));
        }
        for info in &self.generator_infos {
            if info.outputs.is_empty() {
                return Err(anyhow!(
                    "each 'generator' must have at least one 'output' specified"
                ));
            }
        }

        let parser_config = self.parser_config.unwrap_or_default();
        debug!("Parser Config: {:#?}", parser_config);
        debug!("Client Config: {:#?}", self.client_config);

        let mut panel = if self.pending {
            info!("Rendering pending query '{}'...", self.key);
            Panel::loading()
        } else {
            let mut client = Client::with_config(self.source, self.client_config);
            let state = client.fetch(&self.key);
            info!("Decoding query '{}'...", self.key);
            resolve(state, &self.parser, &parser_config)
        };

        if let Some(check) = &self.image_check {
            let switched = panel.check_images(check.as_ref());
            if switched > 0 {
                warn!("{} avatar image(s) failed to load, showing initials", switched);
            }
        }

        for mut info in self.generator_infos {
            for output in info.outputs {
                info!(
                    "Generating for generator '{:?}' to output '{:?}'...",
                    info.generator,
                    output.borrow()
                );
                info.generator
                    .generate(&panel, output.borrow_mut().deref_mut())?;
            }
        }

        Ok(match &panel {
            Panel::Loading { .. } => Outcome::Loading,
            Panel::Failed { .. } => Outcome::Failed,
            Panel::Ready { items } => Outcome::Ready {
                friends: items.len(),
            },
        })
    }
}

fn resolve<P: Parser>(state: &QueryState, parser: &P, config: &parser::Config) -> Panel {
    match Panel::from_state(state, parser, config) {
        Ok(panel) => panel,
        Err(err) => {
            error!("{}", err);
            if let Some(payload) = state.payload() {
                parser::report(&payload.data, &err);
            }
            Panel::failed(err)
        }
    }
}
