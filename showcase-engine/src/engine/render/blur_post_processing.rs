use bevy::{
    core_pipeline::{
        core_3d::graph::{Core3d, Node3d},
        fullscreen_vertex_shader::fullscreen_shader_vertex_state,
    },
    ecs::query::QueryItem,
    prelude::*,
    render::{
        RenderApp,
        extract_component::{
            ComponentUniforms, DynamicUniformIndex, ExtractComponent, ExtractComponentPlugin,
            UniformComponentPlugin,
        },
        render_graph::{
            NodeRunError, RenderGraphApp, RenderGraphContext, RenderLabel, ViewNode, ViewNodeRunner,
        },
        render_resource::{
            binding_types::{sampler, texture_2d, uniform_buffer},
            *,
        },
        renderer::{RenderContext, RenderDevice},
        view::ViewTarget,
    },
};
use constants::render_settings::{BLUR_ITERATIONS_DESKTOP, BLUR_ITERATIONS_MOBILE, BLUR_RADIUS};

use crate::engine::events::InfoPanelToggle;
use crate::engine::render::border_curvature::{
    BorderCurvature, BorderCurvatureLabel, BorderCurvatureSettings,
};
use crate::engine::render::scene_cameras::PhotoCamera;
use crate::engine::state::ShowcaseState;

const BLUR_SHADER_PATH: &str = "shaders/showcase_blur.wgsl";

/// Iterative blur over the photo layer while the info panel is open.
///
/// Must be added after [`BorderCurvaturePlugin`](super::border_curvature::BorderCurvaturePlugin),
/// the blur node runs after the curvature node.
pub struct BlurPostProcessPlugin;

impl Plugin for BlurPostProcessPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            ExtractComponentPlugin::<BlurSettings>::default(),
            UniformComponentPlugin::<BlurSettings>::default(),
        ));

        let Some(render_app) = app.get_sub_app_mut(RenderApp) else {
            return;
        };

        render_app
            .add_render_graph_node::<ViewNodeRunner<BlurPostProcessNode>>(
                Core3d,
                BlurPostProcessLabel,
            )
            .add_render_graph_edges(
                Core3d,
                (
                    BorderCurvatureLabel,
                    BlurPostProcessLabel,
                    Node3d::EndMainPassPostProcessing,
                ),
            );
    }

    fn finish(&self, app: &mut App) {
        let Some(render_app) = app.get_sub_app_mut(RenderApp) else {
            return;
        };

        render_app.init_resource::<BlurPostProcessPipeline>();
    }
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, RenderLabel)]
struct BlurPostProcessLabel;

#[derive(Component, Default, Clone, Copy, ExtractComponent, ShaderType)]
pub struct BlurSettings {
    pub radius: f32,
    /// Zero disables the pass entirely.
    pub iterations: u32,
    // WebGL2 needs uniforms padded to 16 bytes
    pub padding: Vec2,
}

/// Blur passes for the current info panel state and device class.
pub fn blur_iterations(info_open: bool, mobile: bool) -> u32 {
    match (info_open, mobile) {
        (false, _) => 0,
        (true, false) => BLUR_ITERATIONS_DESKTOP,
        (true, true) => BLUR_ITERATIONS_MOBILE,
    }
}

pub fn apply_info_toggles(
    mut toggles: EventReader<InfoPanelToggle>,
    mut state: ResMut<ShowcaseState>,
) {
    if let Some(toggle) = toggles.read().last() {
        if toggle.open != state.info_open() {
            info!("Info overlay {}", if toggle.open { "opened" } else { "closed" });
            state.set_info_open(toggle.open);
        }
    }
}

/// Push main-world post-processing inputs onto the photo camera.
pub fn update_post_fx_settings(
    state: Res<ShowcaseState>,
    curvature: Res<BorderCurvature>,
    mut cameras: Query<(&mut BlurSettings, &mut BorderCurvatureSettings), With<PhotoCamera>>,
) {
    let iterations = blur_iterations(state.info_open(), state.is_mobile());
    let edges = curvature.as_vec4();

    for (mut blur, mut bend) in cameras.iter_mut() {
        if blur.iterations != iterations {
            blur.iterations = iterations;
            blur.radius = BLUR_RADIUS;
        }
        if bend.edges != edges {
            bend.edges = edges;
        }
    }
}

#[derive(Default)]
struct BlurPostProcessNode;

impl ViewNode for BlurPostProcessNode {
    type ViewQuery = (
        &'static ViewTarget,
        &'static BlurSettings,
        &'static DynamicUniformIndex<BlurSettings>,
    );

    fn run(
        &self,
        _graph: &mut RenderGraphContext,
        render_context: &mut RenderContext,
        (view_target, blur_settings, settings_index): QueryItem<Self::ViewQuery>,
        world: &World,
    ) -> Result<(), NodeRunError> {
        if blur_settings.iterations == 0 {
            return Ok(());
        }

        let blur_pipeline = world.resource::<BlurPostProcessPipeline>();
        let pipeline_cache = world.resource::<PipelineCache>();

        let Some(pipeline) = pipeline_cache.get_render_pipeline(blur_pipeline.pipeline_id) else {
            return Ok(());
        };

        let settings_uniforms = world.resource::<ComponentUniforms<BlurSettings>>();
        let Some(settings_binding) = settings_uniforms.uniforms().binding() else {
            return Ok(());
        };

        // Each iteration ping-pongs between the view target's two main textures.
        for _ in 0..blur_settings.iterations {
            let post_process = view_target.post_process_write();

            let bind_group = render_context.render_device().create_bind_group(
                "showcase_blur_bind_group",
                &blur_pipeline.layout,
                &BindGroupEntries::sequential((
                    post_process.source,
                    &blur_pipeline.sampler,
                    settings_binding.clone(),
                )),
            );

            let mut render_pass = render_context.begin_tracked_render_pass(RenderPassDescriptor {
                label: Some("showcase_blur_pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: post_process.destination,
                    resolve_target: None,
                    ops: Operations::default(),
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_render_pipeline(pipeline);
            render_pass.set_bind_group(0, &bind_group, &[settings_index.index()]);
            render_pass.draw(0..3, 0..1);
        }

        Ok(())
    }
}

#[derive(Resource)]
struct BlurPostProcessPipeline {
    layout: BindGroupLayout,
    sampler: Sampler,
    pipeline_id: CachedRenderPipelineId,
}

impl FromWorld for BlurPostProcessPipeline {
    fn from_world(world: &mut World) -> Self {
        let render_device = world.resource::<RenderDevice>();

        let layout = render_device.create_bind_group_layout(
            "showcase_blur_bind_group_layout",
            &BindGroupLayoutEntries::sequential(
                ShaderStages::FRAGMENT,
                (
                    texture_2d(TextureSampleType::Float { filterable: true }),
                    sampler(SamplerBindingType::Filtering),
                    uniform_buffer::<BlurSettings>(true),
                ),
            ),
        );

        let sampler = render_device.create_sampler(&SamplerDescriptor {
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            ..default()
        });

        let shader = world.load_asset(BLUR_SHADER_PATH);

        let pipeline_id =
            world
                .resource_mut::<PipelineCache>()
                .queue_render_pipeline(RenderPipelineDescriptor {
                    label: Some("showcase_blur_pipeline".into()),
                    layout: vec![layout.clone()],
                    vertex: fullscreen_shader_vertex_state(),
                    fragment: Some(FragmentState {
                        shader,
                        shader_defs: vec![],
                        entry_point: "fragment".into(),
                        targets: vec![Some(ColorTargetState {
                            format: TextureFormat::bevy_default(),
                            blend: None,
                            write_mask: ColorWrites::ALL,
                        })],
                    }),
                    primitive: PrimitiveState::default(),
                    depth_stencil: None,
                    multisample: MultisampleState::default(),
                    push_constant_ranges: vec![],
                    zero_initialize_workgroup_memory: false,
                });

        Self {
            layout,
            sampler,
            pipeline_id,
        }
    }
}
