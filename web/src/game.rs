use crate::utils::*;
use bitflags::bitflags;
use clap::Args;
use kioku_core as game;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

impl MouseButtons {
    /// Maps `MouseEvent.button` (the button that changed) onto the `MouseEvent.buttons` bits.
    fn from_button(button: i16) -> Self {
        match button {
            0 => Self::LEFT,
            1 => Self::MIDDLE,
            2 => Self::RIGHT,
            3 => Self::BACK,
            4 => Self::FORWARD,
            _ => Self::empty(),
        }
    }
}

/// Reported by an interactive cell when it is clicked, carrying its highlight after the click.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct CellToggle {
    index: game::CellIndex,
    selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    CellToggled(CellToggle),
    NewGrid,
    StartPlaying,
    ShowAnswer,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Pointer {
    /// `buttons` holds every button currently down.
    Down,
    /// `buttons` holds the button that was released.
    Up,
    Leave,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct CellPointerState {
    index: game::CellIndex,
    highlighted: bool,
    interactive: bool,
    pressed: bool,
}

impl CellPointerState {
    /// Returns the next press state and the toggle to report, if the event completes a click.
    fn step(self, pointer: Pointer, buttons: MouseButtons) -> (bool, Option<CellToggle>) {
        if !self.interactive {
            return (false, None);
        }

        match pointer {
            Pointer::Down => (buttons == MouseButtons::LEFT, None),
            Pointer::Up if self.pressed && buttons == MouseButtons::LEFT => (
                false,
                Some(CellToggle {
                    index: self.index,
                    selected: !self.highlighted,
                }),
            ),
            Pointer::Up | Pointer::Leave => (false, None),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: game::CellIndex,
    highlighted: bool,
    #[prop_or_default]
    interactive: bool,
    #[prop_or_default]
    callback: Callback<CellToggle>,
}

fn cell_classes(highlighted: bool, interactive: bool, pressed: bool) -> Classes {
    let mut class = classes!("cell");
    if highlighted {
        class.push("marked");
    }
    if pressed {
        class.push("pressed");
    }
    if !interactive {
        class.push("locked");
    }
    class
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        highlighted,
        interactive,
        callback,
    } = props.clone();

    let pressed = use_state_eq(|| false);
    let class = cell_classes(highlighted, interactive, interactive && *pressed);

    if !interactive {
        return html! {
            <td {class}>{index.to_string()}</td>
        };
    }

    let on_pointer = move |pointer: Pointer, buttons: MouseButtons| {
        let state = CellPointerState {
            index,
            highlighted,
            interactive,
            pressed: *pressed,
        };
        let (next_pressed, toggle) = state.step(pointer, buttons);
        log::trace!("({}) {:?} ({:?})", index, pointer, buttons);
        pressed.set(next_pressed);
        if let Some(toggle) = toggle {
            callback.emit(toggle);
        }
    };

    let onmousedown = {
        let on_pointer = on_pointer.clone();
        Callback::from(move |e: web_sys::MouseEvent| {
            on_pointer(Pointer::Down, MouseButtons::from_bits_truncate(e.buttons()))
        })
    };

    let onmouseup = {
        let on_pointer = on_pointer.clone();
        Callback::from(move |e: web_sys::MouseEvent| {
            on_pointer(Pointer::Up, MouseButtons::from_button(e.button()))
        })
    };

    let onmouseleave = Callback::from(move |_: web_sys::MouseEvent| {
        on_pointer(Pointer::Leave, MouseButtons::empty())
    });

    html! {
        <td {class} {onmousedown} {onmouseup} {onmouseleave}>{index.to_string()}</td>
    }
}

#[derive(Args, Properties, Debug, Default, Clone, PartialEq)]
pub(crate) struct GridProps {
    /// Force a seed for the first grid instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<String>,

    /// Number of columns
    #[arg(long)]
    #[prop_or_default]
    pub cols: Option<game::Coord>,

    /// Number of rows
    #[arg(long)]
    #[prop_or_default]
    pub rows: Option<game::Coord>,

    /// Number of hidden answer cells
    #[arg(long)]
    #[prop_or_default]
    pub answers: Option<game::CellCount>,
}

impl GridProps {
    fn grid_config(&self) -> game::GridConfig {
        let default = game::GridConfig::default();
        let size = (
            self.cols.unwrap_or(default.cols()),
            self.rows.unwrap_or(default.rows()),
        );
        let answers = self.answers.unwrap_or(default.answers);

        game::GridConfig::validated(size, answers).unwrap_or_else(|err| {
            log::error!(
                "invalid grid {:?} with {} answers ({}), using default",
                size,
                answers,
                err
            );
            default
        })
    }
}

/// The placeholder takes the width of the hidden board so the selection board does not move.
fn concealed_style(cols: game::Coord) -> String {
    format!("--cols: {cols}")
}

#[derive(Debug)]
pub(crate) struct GridView {
    engine: game::MemoryEngine,
    forced_seed: Option<u64>,
}

impl GridView {
    fn from_props(props: &GridProps) -> Self {
        let forced_seed = props.seed.as_deref().map(seed_from_str);
        log::debug!("seed: {:?}", forced_seed);
        Self {
            engine: game::MemoryEngine::new(props.grid_config()),
            forced_seed,
        }
    }

    /// A forced seed is only used for the first grid.
    fn next_seed(&mut self) -> u64 {
        self.forced_seed.take().unwrap_or_else(js_random_seed)
    }

    fn new_grid(&mut self) -> bool {
        let seed = self.next_seed();
        log::debug!("new grid, seed: {}", seed);

        match self
            .engine
            .regenerate(game::RandomAnswerGenerator::new(seed))
        {
            Ok(_) => true,
            Err(err) => {
                log::warn!("could not generate grid: {}", err);
                false
            }
        }
    }

    fn select_cell(&mut self, toggle: CellToggle) -> bool {
        match self.engine.set_selected(toggle.index, toggle.selected) {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::warn!("rejected selection of cell {}: {}", toggle.index, err);
                false
            }
        }
    }

    fn show_answer(&mut self) -> bool {
        let before = (self.engine.is_answer_visible(), self.engine.score());
        let score = self.engine.reveal_and_score();
        log::debug!("score: {}", score);
        before != (true, score)
    }

    fn apply(&mut self, msg: Msg) -> bool {
        use Msg::*;

        match msg {
            CellToggled(toggle) => {
                log::debug!("cell toggled: {:?}", toggle);
                self.select_cell(toggle)
            }
            NewGrid => self.new_grid(),
            StartPlaying => {
                log::debug!("start playing");
                self.engine.hide_answer().has_update()
            }
            ShowAnswer => self.show_answer(),
        }
    }

    fn view_board(&self, ctx: &Context<Self>, members: &game::CellSet, interactive: bool) -> Html {
        let (cols, rows) = self.engine.size();
        let callback = ctx.link().callback(Msg::CellToggled);

        html! {
            <table class={classes!("board", interactive.then_some("playable"))}>
                {
                    for (0..rows).map(|row| {
                        let start = game::CellIndex::from(row) * game::CellIndex::from(cols);
                        html! {
                            <tr>
                                {
                                    for (start..start + game::CellIndex::from(cols)).map(|index| {
                                        let highlighted = members.contains(index);
                                        let callback = callback.clone();
                                        html! {
                                            <CellView {index} {highlighted} {interactive} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        }
                    })
                }
            </table>
        }
    }
}

impl Component for GridView {
    type Message = Msg;
    type Properties = GridProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::from_props(ctx.props())
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.apply(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let chosen = format!("{} chosen cells", self.engine.chosen_count());
        let score = self.engine.score();
        let score_class = classes!("score", score.is_perfect().then_some("perfect"));

        let answer_board = if self.engine.is_answer_visible() {
            self.view_board(ctx, self.engine.answer(), false)
        } else {
            html! { <div class="board concealed" style={concealed_style(self.engine.size().0)}/> }
        };
        let selection_board = self.view_board(ctx, self.engine.selection(), true);

        let cb_new_grid = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGrid
        });
        let cb_start_playing = ctx.link().callback(|_| StartPlaying);
        let cb_show_answer = ctx.link().callback(|_| ShowAnswer);

        html! {
            <div class="kioku" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <header>{chosen}</header>
                <section class="boards">
                    {answer_board}
                    {selection_board}
                </section>
                <nav>
                    <button class="generate" onclick={cb_new_grid}>{"Generate new grid"}</button>
                    <button class="start" onclick={cb_start_playing}>{"Start Playing"}</button>
                    <button class="reveal" onclick={cb_show_answer}>{"Show Answer"}</button>
                </nav>
                <output class={score_class}>{score.to_string()}</output>
            </div>
        }
    }
}
