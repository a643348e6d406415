use crate::dashboards::d400_profit_analysis::controller::SEARCH_INPUT_ID;
use crate::dashboards::d400_profit_analysis::AnalysisTableController;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::dashboards::d400_profit_analysis::{CategoryFilter, ProductCategory, SortKey};
use leptos::prelude::*;
use thaw::*;

/// Search, sort and category controls above the table
#[component]
pub fn TableFilters(controller: AnalysisTableController) -> impl IntoView {
    let state = controller.state();

    let sort_code = RwSignal::new(state.with_untracked(|s| s.filters.sort.code()));
    Effect::new(move |_| {
        if let Some(sort) = SortKey::from_code(&sort_code.get()) {
            untrack(move || controller.set_sort(sort));
        }
    });

    let category_code = RwSignal::new(state.with_untracked(|s| s.filters.category.code().to_string()));
    Effect::new(move |_| {
        if let Some(category) = CategoryFilter::from_code(&category_code.get()) {
            untrack(move || controller.set_category(category));
        }
    });

    view! {
        <div class="filter-panel">
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <SearchInput
                    input_id=SEARCH_INPUT_ID
                    placeholder="Search products..."
                    initial=state.with_untracked(|s| s.filters.search_text().to_string())
                    on_change=Callback::new(move |text: String| controller.set_search_text(text))
                />

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Sort by"</Label>
                    <Select value=sort_code>
                        {SortKey::options()
                            .into_iter()
                            .map(|(key, label)| view! { <option value=key.code()>{label}</option> })
                            .collect_view()}
                    </Select>
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Category"</Label>
                    <Select value=category_code>
                        <option value=CategoryFilter::All.code()>"All Categories"</option>
                        {ProductCategory::all()
                            .into_iter()
                            .map(|c| view! { <option value=c.code()>{c.display_name()}</option> })
                            .collect_view()}
                    </Select>
                </Flex>

                <Button appearance=ButtonAppearance::Secondary on_click=move |_| controller.export_table_csv()>
                    {icon("download")}" CSV"
                </Button>
            </Flex>
        </div>
    }
}
